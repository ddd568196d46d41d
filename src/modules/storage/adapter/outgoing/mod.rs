pub mod object_store_gcs;
