// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ExitInfo;

#[test]
fn script_error_exposes_kind() {
    let err: FxError = ScriptFailure::new(
        ErrorKind::UserCancelled,
        "npm test",
        "cancelled by user",
        ExitInfo::default(),
    )
    .into();
    assert_eq!(err.kind(), Some(ErrorKind::UserCancelled));
    assert!(err.is_user_cancel());
    assert_eq!(err.failure().map(|f| f.command.as_str()), Some("npm test"));
    assert_eq!(err.to_string(), "failed to run `npm test`: user cancelled: cancelled by user");
}

#[test]
fn redirect_error_has_no_kind() {
    let err = FxError::Redirect {
        path: PathBuf::from("/nope/log"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert_eq!(err.kind(), None);
    assert!(!err.is_user_cancel());
    assert!(err.failure().is_none());
    assert!(err.to_string().contains("/nope/log"), "got: {err}");
}
