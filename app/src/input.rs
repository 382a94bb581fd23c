use std::path::{Path, PathBuf};

use stock_core::LoadOptions;

/// Positional argument that prints the banner instead of analysing a file.
pub const VERSION_ARG: &str = "version";
pub const VERSION_BANNER: &str = "StockAnalyser version 0.1";

#[derive(Debug)]
pub enum Invocation {
    Version,
    Analyse { path: PathBuf, options: LoadOptions },
}

pub fn classify(path: &Path, skip_malformed: bool) -> Invocation {
    if path.as_os_str() == VERSION_ARG {
        return Invocation::Version;
    }

    let options = if skip_malformed {
        LoadOptions::skip_malformed()
    } else {
        LoadOptions::default()
    };
    Invocation::Analyse {
        path: path.to_path_buf(),
        options,
    }
}
