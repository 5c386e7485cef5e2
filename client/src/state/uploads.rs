#[cfg(test)]
#[path = "uploads_test.rs"]
mod uploads_test;

/// Opaque correlation token tying an async upload completion back to the
/// right tracked image.
///
/// Keys are generated once per accepted file and never reused. They carry no
/// ordering: display order is the insertion order of the tracker's list, and
/// completions are matched by key because list positions shift when the user
/// removes entries mid-upload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocalKey(String);

impl LocalKey {
    /// Generate a fresh, unique key.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

/// Lifecycle of one tracked image.
///
/// The only legal transitions are `Uploading → Ready` and
/// `Uploading → Failed`; a resolved entry never changes again. Retrying a
/// failed file means removing it and adding it fresh, which mints a new key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    /// The upload task is in flight.
    Uploading,
    /// The backend stored the image and assigned it an id.
    Ready,
    /// The upload failed; the entry holds the error message.
    Failed,
}

/// One selected image, tracked from selection to server-confirmed storage.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingImage {
    /// Correlation key, unique per accepted file.
    pub key: LocalKey,
    /// Original filename, also used as the upload description.
    pub file_name: String,
    /// File size in bytes, as reported by the browser.
    pub size_bytes: u64,
    /// Local object URL for the preview thumbnail. Never persisted; the
    /// owner must revoke it when the entry leaves the tracker.
    pub preview_url: Option<String>,
    /// Server-assigned image id, set on successful upload.
    pub remote_id: Option<i64>,
    /// Current lifecycle state.
    pub status: UploadStatus,
    /// Upload error message, set when `status` is `Failed`.
    pub error: Option<String>,
}

/// Tracks every selected image through its independent upload task.
///
/// Uploads are fire-and-forget per file: one entry failing neither cancels
/// nor blocks the others, and there is no batch rollback. All mutation goes
/// through key-addressed methods so an in-flight completion can never clobber
/// a different entry after a concurrent removal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadTracker {
    images: Vec<PendingImage>,
}

impl UploadTracker {
    /// Track an accepted file and hand back nothing; the caller spawns the
    /// upload task for the same key.
    pub fn begin(
        &mut self,
        key: LocalKey,
        file_name: String,
        size_bytes: u64,
        preview_url: Option<String>,
    ) {
        self.images.push(PendingImage {
            key,
            file_name,
            size_bytes,
            preview_url,
            remote_id: None,
            status: UploadStatus::Uploading,
            error: None,
        });
    }

    /// Record a successful upload for `key`.
    ///
    /// Returns false when the entry was removed in the meantime or had
    /// already resolved; late completions for dead keys are dropped.
    pub fn mark_ready(&mut self, key: &LocalKey, remote_id: i64) -> bool {
        match self.entry_mut(key) {
            Some(image) if image.status == UploadStatus::Uploading => {
                image.status = UploadStatus::Ready;
                image.remote_id = Some(remote_id);
                true
            }
            _ => false,
        }
    }

    /// Record a failed upload for `key`. Same late-completion rules as
    /// [`UploadTracker::mark_ready`].
    pub fn mark_failed(&mut self, key: &LocalKey, message: String) -> bool {
        match self.entry_mut(key) {
            Some(image) if image.status == UploadStatus::Uploading => {
                image.status = UploadStatus::Failed;
                image.error = Some(message);
                true
            }
            _ => false,
        }
    }

    /// Drop the entry for `key`, returning it so the caller can release its
    /// preview object URL immediately.
    pub fn remove(&mut self, key: &LocalKey) -> Option<PendingImage> {
        let index = self.images.iter().position(|img| &img.key == key)?;
        Some(self.images.remove(index))
    }

    /// Drop every entry, returning them for preview cleanup.
    pub fn clear(&mut self) -> Vec<PendingImage> {
        std::mem::take(&mut self.images)
    }

    /// True iff the tracker is non-empty and every entry is `Ready`.
    pub fn all_ready(&self) -> bool {
        !self.images.is_empty()
            && self
                .images
                .iter()
                .all(|img| img.status == UploadStatus::Ready)
    }

    /// Whether any entry is still uploading.
    pub fn has_uploading(&self) -> bool {
        self.images
            .iter()
            .any(|img| img.status == UploadStatus::Uploading)
    }

    /// Whether any entry has failed.
    pub fn has_failed(&self) -> bool {
        self.images
            .iter()
            .any(|img| img.status == UploadStatus::Failed)
    }

    /// Server ids of ready entries, in display order.
    pub fn ready_ids(&self) -> Vec<i64> {
        self.images.iter().filter_map(|img| img.remote_id).collect()
    }

    /// Tracked entries in display order.
    pub fn images(&self) -> &[PendingImage] {
        &self.images
    }

    /// Whether nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Number of tracked entries.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    fn entry_mut(&mut self, key: &LocalKey) -> Option<&mut PendingImage> {
        self.images.iter_mut().find(|img| &img.key == key)
    }
}
