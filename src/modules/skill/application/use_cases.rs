use std::sync::Arc;

use super::ports::incoming::{
    CreateFeaturedSkillUseCase, CreateSkillUseCase, DeleteFeaturedSkillUseCase,
    DeleteSkillUseCase, ListFeaturedSkillsUseCase, ListSkillsUseCase, UpdateFeaturedSkillUseCase,
    UpdateSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub list: Arc<dyn ListSkillsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
    pub list_featured: Arc<dyn ListFeaturedSkillsUseCase + Send + Sync>,
    pub create_featured: Arc<dyn CreateFeaturedSkillUseCase + Send + Sync>,
    pub update_featured: Arc<dyn UpdateFeaturedSkillUseCase + Send + Sync>,
    pub delete_featured: Arc<dyn DeleteFeaturedSkillUseCase + Send + Sync>,
}
