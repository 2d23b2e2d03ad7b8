use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store to `dest_file`, or zip it into `dest_file` with a
    /// `.zip` extension. Returns the path
    /// written, or `None` when the user declined to overwrite.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = cfg.store_path();
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::NoData);
        }

        if compress && dest.extension().is_some_and(|e| e == "zip") {
            return Err(AppError::Other(
                "with --compress, give the uncompressed file name (the .zip is derived)".into(),
            ));
        }

        // with --compress only the derived .zip is written
        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if target.exists() {
            warning(format!("The file '{}' already exists.", target.display()));
            if !prompt::confirm("Overwrite it?")? {
                info("Backup cancelled by user.");
                return Ok(None);
            }
        }

        if compress {
            compress_backup(&src, dest, &target)?;
        } else {
            fs::copy(&src, &target)?;
        }
        success(format!("Backup created: {}", target.display()));

        LogLogic::record(
            cfg,
            "backup",
            &target.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(target))
    }
}

/// Zip the store into `zip_path`; the archive entry is named after
/// `dest`, the uncompressed backup name the user asked for.
fn compress_backup(src: &Path, dest: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "daily_log.json".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(())
}
