/// What a client is allowed to upload, and where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Avatar,
    Cv,
    PostImage,
    ProjectImage,
    SkillImage,
    VideoThumbnail,
}

impl UploadKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "avatar" => Some(Self::Avatar),
            "cv" => Some(Self::Cv),
            "post-image" => Some(Self::PostImage),
            "project-image" => Some(Self::ProjectImage),
            "skill-image" => Some(Self::SkillImage),
            "video-thumbnail" => Some(Self::VideoThumbnail),
            _ => None,
        }
    }

    pub fn bucket(&self) -> &'static str {
        match self {
            Self::Avatar => "avatars",
            Self::Cv => "cvs",
            Self::PostImage => "post-images",
            Self::ProjectImage => "project-images",
            Self::SkillImage => "skill-images",
            Self::VideoThumbnail => "video-thumbnails",
        }
    }

    /// Content-type gate, applied before any storage interaction.
    pub fn accepts(&self, content_type: &str) -> bool {
        match self {
            Self::Cv => content_type == "application/pdf",
            _ => content_type.starts_with("image/"),
        }
    }
}

/// Strips anything that does not belong in an object key. Spaces become
/// underscores; path separators cannot survive.
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cv_takes_pdf_only() {
        assert!(UploadKind::Cv.accepts("application/pdf"));
        assert!(!UploadKind::Cv.accepts("image/png"));
        assert!(!UploadKind::Cv.accepts("application/zip"));
    }

    #[test]
    fn image_kinds_take_any_image_subtype() {
        assert!(UploadKind::Avatar.accepts("image/png"));
        assert!(UploadKind::PostImage.accepts("image/webp"));
        assert!(!UploadKind::ProjectImage.accepts("application/pdf"));
    }

    #[test]
    fn unknown_kind_does_not_parse() {
        assert_eq!(UploadKind::parse("post-image"), Some(UploadKind::PostImage));
        assert_eq!(UploadKind::parse("resume"), None);
    }

    #[test]
    fn file_names_lose_path_separators() {
        assert_eq!(sanitize_file_name("../etc/passwd"), ".._etc_passwd");
        assert_eq!(sanitize_file_name("my photo (1).png"), "my_photo__1_.png");
    }
}
