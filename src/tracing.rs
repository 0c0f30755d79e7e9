use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, OnceLock, RwLock};

use tracing_subscriber::fmt::MakeWriter;

/// Log sink shared between the subscriber and late log-file configuration.
/// Everything goes to stderr; stdout stays reserved for the JSON result.
#[derive(Clone, Default)]
struct TeeWriter {
    file: Arc<RwLock<Option<std::fs::File>>>,
}

struct TeeGuard {
    file: Arc<RwLock<Option<std::fs::File>>>,
}

impl<'a> MakeWriter<'a> for TeeWriter {
    type Writer = TeeGuard;

    fn make_writer(&'a self) -> Self::Writer {
        TeeGuard {
            file: self.file.clone(),
        }
    }
}

impl Write for TeeGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = io::stderr().write(buf)?;
        if let Some(file) = &mut *self.file.write().unwrap() {
            let _ = file.write_all(buf);
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = &mut *self.file.write().unwrap() {
            let _ = file.flush();
        }
        Ok(())
    }
}

static WRITER: OnceLock<TeeWriter> = OnceLock::new();

pub fn init() {
    let _ = tracing_log::LogTracer::init();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let writer = WRITER.get_or_init(TeeWriter::default).clone();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .try_init();
}

/// Route a copy of every log line to `path`, appending. Called once the CLI
/// has been parsed.
pub fn set_log_file(path: Option<&Path>) {
    let Some(writer) = WRITER.get() else { return };
    let mut guard = writer.file.write().unwrap();
    *guard = match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                let _ = std::fs::create_dir_all(parent);
            }
            OpenOptions::new().create(true).append(true).open(path).ok()
        }
        None => None,
    };
}
