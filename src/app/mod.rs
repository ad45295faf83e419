//! App Orchestration
//!
//! `App` owns the session [`Model`] and the sending half of the API service
//! channel. Its methods are grouped by domain:
//! - navigation: listing directories, selection, applying listing responses
//! - dialogs: the upload, new folder, rename and delete flows
//! - file_ops: downloads and view action dispatch
//!
//! Nothing here awaits the network. Requests go out on `api_tx`; responses
//! come back through `handlers::api`.

pub(crate) mod dialogs;
pub(crate) mod file_ops;
pub(crate) mod navigation;

use std::path::PathBuf;

use tokio::sync::mpsc::UnboundedSender;

use crate::model::Model;
use crate::services::api::ApiRequest;
use crate::ui::icons::IconRenderer;

pub struct App {
    pub model: Model,
    pub icon_renderer: IconRenderer,
    api_tx: UnboundedSender<ApiRequest>,
    download_dir: PathBuf,
}

impl App {
    pub fn new(
        model: Model,
        api_tx: UnboundedSender<ApiRequest>,
        icon_renderer: IconRenderer,
        download_dir: PathBuf,
    ) -> Self {
        Self {
            model,
            icon_renderer,
            api_tx,
            download_dir,
        }
    }

    pub fn download_dir(&self) -> &PathBuf {
        &self.download_dir
    }

    /// Hand a request to the API service
    fn send(&self, request: ApiRequest) {
        tracing::debug!("request: {:?}", request);
        if self.api_tx.send(request).is_err() {
            tracing::warn!("API service is gone, request dropped");
        }
    }
}
