use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::features::videos::dtos::{UploadVideoResponse, VideoResponse};
use crate::features::videos::models::Video;
use crate::modules::storage::LocalFileStore;

const COLUMNS: &str = "id, filename, filepath, uploaded_at";

/// Service for uploaded videos and their files on disk
pub struct VideoService {
    pool: SqlitePool,
    store: LocalFileStore,
    max_upload_size: usize,
}

impl VideoService {
    pub fn new(pool: SqlitePool, store: LocalFileStore, max_upload_size: usize) -> Self {
        Self {
            pool,
            store,
            max_upload_size,
        }
    }

    pub fn store(&self) -> &LocalFileStore {
        &self.store
    }

    pub fn max_upload_size(&self) -> usize {
        self.max_upload_size
    }

    /// All video records in storage order
    pub async fn list(&self) -> Result<Vec<VideoResponse>> {
        let query = format!("SELECT {COLUMNS} FROM videos");
        let videos = sqlx::query_as::<_, Video>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list videos: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(videos.into_iter().map(|v| v.into()).collect())
    }

    pub async fn get(&self, id: i64) -> Result<VideoResponse> {
        self.find(id)
            .await?
            .map(|v| v.into())
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))
    }

    async fn find(&self, id: i64) -> Result<Option<Video>> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = ?");
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(video)
    }

    /// Store an uploaded file and record it.
    ///
    /// Oversized content is rejected before anything is written. The file is
    /// on disk before the row is inserted. An existing file with the same
    /// name is replaced.
    pub async fn upload(&self, filename: &str, data: &[u8]) -> Result<UploadVideoResponse> {
        if data.len() > self.max_upload_size {
            return Err(AppError::BadRequest(format!(
                "File size exceeds {}MB limit",
                self.max_upload_size / 1024 / 1024
            )));
        }

        let path = self.store.write(filename, data).await?;
        let filepath = path.to_string_lossy().into_owned();

        let query = format!(
            "INSERT INTO videos (filename, filepath, uploaded_at) \
             VALUES (?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(filename)
            .bind(&filepath)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to record uploaded video {}: {:?}", filename, e);
                AppError::Database(e)
            })?;

        info!(
            "Video uploaded: id={}, filepath={}, size={}",
            video.id,
            video.filepath,
            data.len()
        );

        Ok(UploadVideoResponse {
            filename: video.filename,
            id: video.id,
        })
    }

    /// Delete a video's file, then its row.
    ///
    /// File removal is best effort: a failure is logged and the row is
    /// deleted regardless.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let video = self
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

        if let Err(e) = self.store.remove(&video.filepath).await {
            warn!("Error deleting file {}: {}", video.filepath, e);
        }

        sqlx::query("DELETE FROM videos WHERE id = ?")
            .bind(video.id)
            .execute(&self.pool)
            .await?;

        info!("Video deleted: id={}, filepath={}", video.id, video.filepath);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::test_pool;
    use crate::shared::constants::MAX_UPLOAD_SIZE;
    use tempfile::TempDir;

    const MIB: usize = 1024 * 1024;

    async fn service(dir: &TempDir) -> VideoService {
        let store = LocalFileStore::new(dir.path().join("uploads"));
        VideoService::new(test_pool().await, store, MAX_UPLOAD_SIZE)
    }

    async fn row_count(service: &VideoService) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM videos")
            .fetch_one(&service.pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_oversized_upload_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir).await;
        let data = vec![0u8; 101 * MIB];

        let err = service.upload("big.mp4", &data).await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(!dir.path().join("uploads/big.mp4").exists());
        assert_eq!(row_count(&service).await, 0);
    }

    #[tokio::test]
    async fn test_upload_writes_file_and_row() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir).await;
        let data = vec![7u8; 50 * MIB];

        let uploaded = service.upload("clip.mp4", &data).await.unwrap();
        assert_eq!(uploaded.filename, "clip.mp4");

        let expected = dir.path().join("uploads").join("clip.mp4");
        assert_eq!(std::fs::metadata(&expected).unwrap().len(), data.len() as u64);

        let videos = service.list().await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, uploaded.id);
        assert_eq!(videos[0].filename, "clip.mp4");

        let filepath: String = sqlx::query_scalar("SELECT filepath FROM videos WHERE id = ?")
            .bind(uploaded.id)
            .fetch_one(&service.pool)
            .await
            .unwrap();
        assert_eq!(filepath, expected.to_string_lossy());
    }

    #[tokio::test]
    async fn test_upload_at_limit_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());
        let service = VideoService::new(test_pool().await, store, 16);

        service.upload("exact.bin", &[1u8; 16]).await.unwrap();
        assert!(service.upload("over.bin", &[1u8; 17]).await.is_err());
        assert_eq!(row_count(&service).await, 1);
    }

    #[tokio::test]
    async fn test_same_filename_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir).await;

        let first = service.upload("dup.mp4", b"one").await.unwrap();
        let second = service.upload("dup.mp4", b"two").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(row_count(&service).await, 2);
        let bytes = std::fs::read(dir.path().join("uploads/dup.mp4")).unwrap();
        assert_eq!(bytes, b"two");
    }

    #[tokio::test]
    async fn test_invalid_filename_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir).await;

        let err = service.upload("../escape.mp4", b"x").await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(!dir.path().join("escape.mp4").exists());
        assert_eq!(row_count(&service).await, 0);
    }

    #[tokio::test]
    async fn test_delete_removes_file_and_row() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir).await;
        let uploaded = service.upload("gone.mp4", b"bytes").await.unwrap();

        service.delete(uploaded.id).await.unwrap();

        assert!(!dir.path().join("uploads/gone.mp4").exists());
        assert_eq!(row_count(&service).await, 0);
    }

    #[tokio::test]
    async fn test_delete_with_missing_file_still_deletes_row() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir).await;
        let uploaded = service.upload("manual.mp4", b"bytes").await.unwrap();
        std::fs::remove_file(dir.path().join("uploads/manual.mp4")).unwrap();

        service.delete(uploaded.id).await.unwrap();

        assert_eq!(row_count(&service).await, 0);
    }

    #[tokio::test]
    async fn test_delete_with_unremovable_file_still_deletes_row() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir).await;
        let uploaded = service.upload("stuck.mp4", b"bytes").await.unwrap();

        // A directory at the recorded path makes remove_file fail
        let path = dir.path().join("uploads/stuck.mp4");
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        service.delete(uploaded.id).await.unwrap();

        assert_eq!(row_count(&service).await, 0);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_missing_video() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir).await;

        assert!(matches!(
            service.delete(1).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            service.get(1).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
