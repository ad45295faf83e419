//! API Response Handler
//!
//! Routes responses from the background API service to the App method
//! that owns the state they affect.

use crate::services::api::ApiResponse;
use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - Listing: directory listing tagged with its navigation sequence token
/// - UploadProgress: fraction sent of an in-flight upload
/// - Mutation: result of an upload, mkdir, rename or delete submission
/// - Downloaded: local path of a finished download
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::Listing { seq, path, result } => {
            app.finish_listing(seq, path, result);
        }

        ApiResponse::UploadProgress { ticket, fraction } => {
            app.upload_progress(ticket, fraction);
        }

        ApiResponse::Mutation {
            ticket,
            operation,
            result,
        } => {
            app.finish_mutation(ticket, operation, result);
        }

        ApiResponse::Downloaded { ticket, result } => {
            app.finish_download(ticket, result);
        }
    }
}
