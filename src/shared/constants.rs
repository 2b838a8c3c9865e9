/// Default upload size limit in bytes (100 MiB)
pub const MAX_UPLOAD_SIZE: usize = 100 * 1024 * 1024;

/// Slack added to the upload route's body limit for multipart framing
pub const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// URL prefix under which the upload directory is served
pub const UPLOADS_URL_PREFIX: &str = "/uploads";
