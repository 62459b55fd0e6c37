//! Command dispatch and handlers.

pub mod features;
pub mod generate;
pub mod manifest;

use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::adapters::{
    BuiltinContentProvider, LiveContentProvider, RecordingContentProvider,
    ReplayingContentProvider,
};
use crate::cassette::recorder::CassetteRecorder;
use crate::cli::Command;
use crate::ports::content::ContentProvider;

/// Dispatch a parsed command to its handler.
///
/// The content provider is chosen from the environment:
/// `SITEWRIGHT_CASSETTE` replays a recorded cassette,
/// `SITEWRIGHT_CONTENT_URL` calls a remote content service, and the
/// builtin tables serve everything else. When `SITEWRIGHT_RECORD` names a
/// file, all provider exchanges are recorded there.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let (provider, recorder) = provider_from_env()?;

    let result = dispatch_with_provider(command, provider.as_ref());

    // Write the cassette after the command completes, even on error.
    if let Some(recorder) = recorder {
        let mut recorder = recorder.lock().map_err(|_| "cassette recorder lock poisoned")?;
        recorder.finish().map_err(|e| format!("failed to write cassette: {e}"))?;
    }

    result
}

/// Dispatch a command with the given content provider.
fn dispatch_with_provider(
    command: &Command,
    provider: &dyn ContentProvider,
) -> Result<(), String> {
    match command {
        Command::Generate { selection, out } => {
            generate::run(provider, selection, out.as_deref())
        }
        Command::Manifest { selection } => manifest::run(selection),
        Command::Features => features::run(),
    }
}

type ProviderSetup = (Box<dyn ContentProvider>, Option<Arc<Mutex<CassetteRecorder>>>);

fn provider_from_env() -> Result<ProviderSetup, String> {
    let inner: Box<dyn ContentProvider> = if let Ok(path) = env::var("SITEWRIGHT_CASSETTE") {
        Box::new(ReplayingContentProvider::from_file(Path::new(&path))?)
    } else if let Ok(url) = env::var("SITEWRIGHT_CONTENT_URL") {
        Box::new(LiveContentProvider::new(url))
    } else {
        Box::new(BuiltinContentProvider)
    };

    if let Ok(path) = env::var("SITEWRIGHT_RECORD") {
        let session = format!("sitewright-{}", Uuid::new_v4());
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(PathBuf::from(path), session)));
        let provider = RecordingContentProvider::new(inner, Arc::clone(&recorder));
        Ok((Box::new(provider), Some(recorder)))
    } else {
        Ok((inner, None))
    }
}
