mod support;

use std::sync::atomic::Ordering;

use filehub_panels::{PanelError, SelectedFile, UploadPanel, UploadState, upload};
use support::FakeService;

#[tokio::test]
async fn test_upload_without_file_never_calls_service() {
    let service = FakeService::new();
    let mut panel = UploadPanel::new();

    let err = panel.submit(&service).await.expect_err("nothing staged");

    assert!(err.is_validation());
    assert_eq!(panel.error(), Some(upload::NO_FILE_MESSAGE));
    assert_eq!(service.uploads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_successful_upload_clears_selection() -> anyhow::Result<()> {
    let service = FakeService::new();
    let mut panel = UploadPanel::new();
    panel.select(Some(SelectedFile::new("notes.txt", b"hello".to_vec())));

    let result = panel.submit(&service).await?;

    assert!(!result.duplicate);
    assert_eq!(panel.state(), &UploadState::Idle);
    assert_eq!(panel.selected(), None);
    assert_eq!(panel.error(), None);
    assert_eq!(panel.notice(), Some("File uploaded successfully."));
    assert_eq!(service.uploads.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_upload_reports_saved_bytes() -> anyhow::Result<()> {
    let service = FakeService::new();
    service.insert("original.bin", &[7_u8; 4096]);

    let mut panel = UploadPanel::new();
    panel.drop_files(vec![SelectedFile::new("copy.bin", vec![7_u8; 4096])]);
    let result = panel.submit(&service).await?;

    assert!(result.duplicate);
    assert_eq!(result.saved_storage, 4096);
    assert_eq!(panel.notice(), Some("Duplicate file! You saved 4096 bytes."));
    assert_eq!(service.ids(), vec![1]);
    Ok(())
}

#[tokio::test]
async fn test_failed_upload_is_retryable() -> anyhow::Result<()> {
    let service = FakeService::new();
    service.fail_upload.store(true, Ordering::SeqCst);

    let mut panel = UploadPanel::new();
    let file = SelectedFile::new("a.txt", b"a".to_vec());
    panel.select(Some(file.clone()));

    let err = panel.submit(&service).await.expect_err("server down");
    assert!(matches!(err, PanelError::Service(ref e) if e.is_server()));
    assert_eq!(panel.error(), Some(upload::UPLOAD_FAILED_MESSAGE));
    assert_eq!(panel.state(), &UploadState::FileSelected(file));
    assert!(panel.can_submit());

    // no automatic retry happened
    assert_eq!(service.uploads.load(Ordering::SeqCst), 1);

    service.fail_upload.store(false, Ordering::SeqCst);
    panel.submit(&service).await?;
    assert_eq!(panel.error(), None);
    assert_eq!(panel.state(), &UploadState::Idle);
    Ok(())
}
