use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{DirectoryEntry, FileServerClient, ProgressCallback, RequestError, UploadFile};

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,    // Bulk transfers (upload, download)
    High,   // Listings and small mutations
}

/// Mutation a dialog submitted, echoed back with its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    CreateDirectory,
    Rename,
    Delete,
}

impl Operation {
    /// Toast shown when the operation succeeds
    pub fn success_message(&self) -> &'static str {
        match self {
            Operation::Upload => "Files uploaded successfully",
            Operation::CreateDirectory => "Folder created",
            Operation::Rename => "Renamed successfully",
            Operation::Delete => "Deleted successfully",
        }
    }
}

/// API request types
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// List a directory; `seq` identifies the navigation that asked for it
    ListDirectory { path: String, seq: u64 },

    /// Create a directory at an absolute remote path
    CreateDirectory { path: String, ticket: u64 },

    /// Move/rename between two absolute remote paths
    Move { from: String, to: String, ticket: u64 },

    /// Delete an absolute remote path
    Delete { path: String, recursive: bool, ticket: u64 },

    /// Upload local files into a remote directory
    Upload {
        path: String,
        files: Vec<UploadFile>,
        overwrite: bool,
        ticket: u64,
    },

    /// Download a remote file into a local directory
    Download {
        path: String,
        dest: PathBuf,
        ticket: u64,
    },
}

impl ApiRequest {
    /// Extract priority from request
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::Upload { .. } | ApiRequest::Download { .. } => Priority::Low,
            _ => Priority::High,
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    Listing {
        seq: u64,
        path: String,
        result: Result<Vec<DirectoryEntry>, RequestError>,
    },

    UploadProgress {
        ticket: u64,
        fraction: f64,
    },

    Mutation {
        ticket: u64,
        operation: Operation,
        result: Result<(), RequestError>,
    },

    Downloaded {
        ticket: u64,
        result: Result<PathBuf, RequestError>,
    },
}

/// Completion notice sent by request tasks back to the service
struct Completed(Priority);

/// API service worker that processes requests in the background
///
/// Only transfers are capped. Listings and small mutations start as soon as
/// they arrive, so a slow upload or download never holds up navigation.
pub struct ApiService {
    client: FileServerClient,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    transfers_in_flight: usize,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<Completed>,
    max_transfers: usize,
}

impl ApiService {
    fn new(
        client: FileServerClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<Completed>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            transfers_in_flight: 0,
            response_tx,
            completion_tx,
            max_transfers: 4,
        }
    }

    /// Add a request to the queue, behind requests of equal or higher priority
    fn enqueue(&mut self, request: ApiRequest) {
        let priority = request.priority();
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p < priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Whether the request at the front of the queue may start now
    fn can_start_next(&self) -> bool {
        match self.request_queue.front() {
            Some((_, Priority::High)) => true,
            Some((_, Priority::Low)) => self.transfers_in_flight < self.max_transfers,
            None => false,
        }
    }

    /// Start the next queued request if there is capacity
    fn process_next(&mut self) {
        if !self.can_start_next() {
            return;
        }

        let Some((request, priority)) = self.request_queue.pop_front() else {
            return;
        };

        if priority == Priority::Low {
            self.transfers_in_flight += 1;
        }

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        // No retries: failures surface to the user as a toast
        tokio::spawn(async move {
            let response = Self::execute_request(&client, request, &response_tx).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(Completed(priority));
        });
    }

    /// Start everything the queue allows
    fn process_ready(&mut self) {
        while self.can_start_next() {
            self.process_next();
        }
    }

    fn finish(&mut self, priority: Priority) {
        if priority == Priority::Low {
            self.transfers_in_flight = self.transfers_in_flight.saturating_sub(1);
        }
    }

    /// Execute an API request and return the response
    async fn execute_request(
        client: &FileServerClient,
        request: ApiRequest,
        response_tx: &mpsc::UnboundedSender<ApiResponse>,
    ) -> ApiResponse {
        match request {
            ApiRequest::ListDirectory { path, seq } => {
                let result = client
                    .list_directory(&path)
                    .await
                    .map(|listing| listing.entries);

                tracing::debug!(
                    "list seq={} path={:?} ok={}",
                    seq,
                    path,
                    result.is_ok()
                );

                ApiResponse::Listing { seq, path, result }
            }

            ApiRequest::CreateDirectory { path, ticket } => ApiResponse::Mutation {
                ticket,
                operation: Operation::CreateDirectory,
                result: client.create_directory(&path).await,
            },

            ApiRequest::Move { from, to, ticket } => ApiResponse::Mutation {
                ticket,
                operation: Operation::Rename,
                result: client.move_entry(&from, &to).await,
            },

            ApiRequest::Delete {
                path,
                recursive,
                ticket,
            } => ApiResponse::Mutation {
                ticket,
                operation: Operation::Delete,
                result: client.delete_entry(&path, recursive).await,
            },

            ApiRequest::Upload {
                path,
                files,
                overwrite,
                ticket,
            } => {
                let progress_tx = response_tx.clone();
                let progress: ProgressCallback = Arc::new(move |fraction| {
                    let _ = progress_tx.send(ApiResponse::UploadProgress { ticket, fraction });
                });

                ApiResponse::Mutation {
                    ticket,
                    operation: Operation::Upload,
                    result: client.upload_files(&path, &files, overwrite, progress).await,
                }
            }

            ApiRequest::Download { path, dest, ticket } => {
                let result = match client.download_file(&path).await {
                    Ok(bytes) => tokio::fs::write(&dest, bytes)
                        .await
                        .map(|_| dest.clone())
                        .map_err(|e| RequestError::new(format!("{}: {}", dest.display(), e))),
                    Err(e) => Err(e),
                };

                ApiResponse::Downloaded { ticket, result }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: FileServerClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<Completed>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.enqueue(request),
                        // UI side hung up
                        None => break,
                    }
                }

                Some(Completed(priority)) = completion_rx.recv() => {
                    service.finish(priority);
                }

                _ = tick.tick() => service.process_ready(),
            }
        }

        tracing::debug!("API service stopped");
    });

    (request_tx, response_rx)
}
