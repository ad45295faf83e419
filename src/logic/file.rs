//! File kind detection
//!
//! Pure functions for picking an icon kind and a MIME type from a name.

use crate::api::DirectoryEntry;

const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// What an entry's icon depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    Audio,
    Image,
    Generic,
}

/// Classify an entry for its icon
///
/// Directories are always `Directory`, whatever their name. Files are
/// classified by extension, case-insensitively.
pub fn file_kind(entry: &DirectoryEntry) -> FileKind {
    if entry.is_dir() {
        return FileKind::Directory;
    }
    kind_from_name(&entry.name)
}

/// Classify a file name by extension
///
/// # Examples
/// ```
/// use filetui::logic::file::{kind_from_name, FileKind};
///
/// assert_eq!(kind_from_name("song.MP3"), FileKind::Audio);
/// assert_eq!(kind_from_name("pic.png"), FileKind::Image);
/// assert_eq!(kind_from_name("doc.txt"), FileKind::Generic);
/// ```
pub fn kind_from_name(name: &str) -> FileKind {
    let lower = name.to_lowercase();
    if lower.ends_with(".mp3") {
        FileKind::Audio
    } else if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        FileKind::Image
    } else {
        FileKind::Generic
    }
}

/// Content type sent for an uploaded file
pub fn guess_mime(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    match lower.rsplit_once('.').map(|(_, ext)| ext) {
        Some("mp3") => "audio/mpeg",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EntryType;

    fn entry(name: &str, entry_type: EntryType) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            entry_type,
            size: None,
            modified: None,
        }
    }

    #[test]
    fn test_directory_always_folder() {
        assert_eq!(file_kind(&entry("music", EntryType::Directory)), FileKind::Directory);
        assert_eq!(file_kind(&entry("covers.png", EntryType::Directory)), FileKind::Directory);
        assert_eq!(file_kind(&entry("live.mp3", EntryType::Directory)), FileKind::Directory);
    }

    #[test]
    fn test_audio_case_insensitive() {
        assert_eq!(file_kind(&entry("song.MP3", EntryType::File)), FileKind::Audio);
        assert_eq!(file_kind(&entry("song.mp3", EntryType::File)), FileKind::Audio);
    }

    #[test]
    fn test_image_extensions() {
        for name in ["pic.png", "a.JPG", "b.jpeg", "c.Gif", "d.webp"] {
            assert_eq!(kind_from_name(name), FileKind::Image, "{}", name);
        }
    }

    #[test]
    fn test_generic_files() {
        assert_eq!(kind_from_name("doc.txt"), FileKind::Generic);
        assert_eq!(kind_from_name("mp3"), FileKind::Generic);
        assert_eq!(kind_from_name("archive.png.zip"), FileKind::Generic);
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("Song.MP3"), "audio/mpeg");
        assert_eq!(guess_mime("cover.jpeg"), "image/jpeg");
        assert_eq!(guess_mime("notes"), "application/octet-stream");
    }
}
