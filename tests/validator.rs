//! Validator collaborator tests: byte sources, diagnostic sinks, and the
//! I/O failure path.

use std::io;
use std::path::Path;
use std::sync::Mutex;

use multiform::{
    is_valid_audio, is_valid_document, is_valid_image, is_valid_pdf, is_valid_txt, ByteSource,
    Category, FileFormat, FnSink, FormatValidator, NoopSink,
};

/// A byte source that always fails, for exercising the diagnostic path.
struct FailingSource(io::ErrorKind);

impl ByteSource for FailingSource {
    fn read_all(&self) -> io::Result<Vec<u8>> {
        Err(io::Error::new(self.0, "simulated failure"))
    }
}

#[test]
fn every_category_rejects_a_none_reference() {
    assert!(is_valid_audio(None, &[]).is_err());
    assert!(is_valid_image(None, &[]).is_err());
    assert!(is_valid_document(None, &[]).is_err());
    assert!(is_valid_pdf(None).is_err());
    assert!(is_valid_txt(None).is_err());
}

#[test]
fn missing_file_is_false_not_an_error() {
    let path = Path::new("/definitely/not/a/real/file.mp3");
    assert_eq!(is_valid_audio(Some(path), &[]), Ok(false));
}

#[test]
fn io_failure_records_one_diagnostic_with_error_text() {
    let messages: Mutex<Vec<String>> = Mutex::new(Vec::new());
    let sink = FnSink(|m: &str| messages.lock().unwrap().push(m.to_string()));
    let validator = FormatValidator::with_sink(Category::Image, sink);

    let source = FailingSource(io::ErrorKind::PermissionDenied);
    assert_eq!(validator.is_valid(Some(&source), &[]), Ok(false));

    let recorded = messages.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].starts_with("An error occurred while reading the file:"));
    assert!(recorded[0].contains("simulated failure"));
}

#[test]
fn diagnostics_never_affect_the_verdict() {
    let noisy = FormatValidator::with_sink(Category::Audio, NoopSink);
    let source = FailingSource(io::ErrorKind::NotFound);
    assert_eq!(noisy.is_valid(Some(&source), &[]), Ok(false));
}

#[test]
fn reads_real_files_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let png_path = dir.path().join("picture.dat");
    std::fs::write(&png_path, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();
    assert_eq!(is_valid_image(Some(png_path.as_path()), &[]), Ok(true));
    assert_eq!(is_valid_audio(Some(png_path.as_path()), &[]), Ok(false));

    let txt_path = dir.path().join("notes");
    std::fs::write(&txt_path, "plain old notes\n").unwrap();
    assert_eq!(is_valid_document(Some(txt_path.as_path()), &[]), Ok(true));
    assert_eq!(is_valid_txt(Some(txt_path.as_path())), Ok(true));
    assert_eq!(is_valid_pdf(Some(txt_path.as_path())), Ok(false));
}

#[test]
fn standalone_txt_check_ignores_the_pdf_signature() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("looks-like.pdf");
    std::fs::write(&path, "%PDF-1.4 but actually plain text").unwrap();

    // The category validator classifies this as pdf; the standalone text
    // check only asks whether every byte is printable.
    assert_eq!(is_valid_document(Some(path.as_path()), &[FileFormat::Pdf]), Ok(false));
    assert_eq!(is_valid_txt(Some(path.as_path())), Ok(true));
}

#[test]
fn truncated_file_shorter_than_signature_is_false() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stub.wav");
    std::fs::write(&path, b"RI").unwrap();
    assert_eq!(is_valid_audio(Some(path.as_path()), &[]), Ok(false));
}

#[test]
fn repeated_calls_are_idempotent() {
    let validator = FormatValidator::new(Category::Image);
    let gif = b"GIF89a".as_slice();
    let exclude = [FileFormat::Ico];
    let first = validator.is_valid(Some(gif), &exclude);
    for _ in 0..3 {
        assert_eq!(validator.is_valid(Some(gif), &exclude), first);
    }
}

#[test]
fn in_memory_sources_work_like_files() {
    let validator = FormatValidator::new(Category::Audio);
    let owned: Vec<u8> = b"ID3\x04\x00".to_vec();
    assert_eq!(validator.is_valid(Some(&owned), &[]), Ok(true));
    assert_eq!(validator.is_valid(Some(owned.as_slice()), &[]), Ok(true));
}
