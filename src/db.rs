use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::models::review::Review;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("review log I/O failure: {0}")]
    IoFailure(#[from] io::Error),

    #[error("review log CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("review id {0} already exists")]
    DuplicateId(String),
}

#[derive(Debug, Default)]
struct Reviews {
    ordered: Vec<Review>,
    ids: HashSet<String>,
}

impl Reviews {
    fn push(&mut self, review: Review) {
        self.ids.insert(review.review_id.clone());
        self.ordered.push(review);
    }
}

#[derive(Debug)]
pub struct ReviewStore {
    path: PathBuf,
    reviews: RwLock<Reviews>,
}

impl ReviewStore {
    // Missing or malformed log is an error
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;

        let mut reviews = Reviews::default();
        for record in csv::Reader::from_reader(file).deserialize() {
            let review: Review = record?;
            if reviews.ids.contains(&review.review_id) {
                warn!(review_id = %review.review_id, "duplicate review id in log");
            }
            reviews.push(review);
        }

        info!(path = %path.display(), count = reviews.ordered.len(), "review log loaded");
        Ok(Self {
            path,
            reviews: RwLock::new(reviews),
        })
    }

    // create_if_missing: write a header-only log instead of failing
    pub fn open(path: impl AsRef<Path>, create_if_missing: bool) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if create_if_missing && !path.exists() {
            warn!(path = %path.display(), "review log not found, starting with an empty store");
            Self::create_log(path)?;
        }
        Self::load(path)
    }

    fn create_log(path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["ReviewId", "Location", "Timestamp", "ReviewBody"])?;
        writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Copy in insertion order
    pub async fn snapshot(&self) -> Vec<Review> {
        self.reviews.read().await.ordered.clone()
    }

    pub async fn len(&self) -> usize {
        self.reviews.read().await.ordered.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Writes the log with `review` added, then adds it to memory. On error
    /// neither the log nor memory has changed.
    pub async fn append(&self, review: Review) -> Result<(), StoreError> {
        let mut reviews = self.reviews.write().await;

        if reviews.ids.contains(&review.review_id) {
            return Err(StoreError::DuplicateId(review.review_id));
        }

        rewrite_log(&self.path, &reviews.ordered, &review)?;
        debug!(review_id = %review.review_id, "review written to log");

        reviews.push(review);
        Ok(())
    }
}

// Full rewrite into a temp file beside the log, then rename over it
fn rewrite_log(path: &Path, existing: &[Review], review: &Review) -> Result<(), StoreError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;

    {
        let mut writer = csv::Writer::from_writer(tmp.as_file_mut());
        for row in existing.iter().chain(std::iter::once(review)) {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
