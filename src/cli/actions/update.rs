//! The update run: locate, confirm, backup, overlay, patch, restart

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::backup::BackupManager;
use crate::cli::context::Context;
use crate::discovery::{find_install_dir, find_source_dir};
use crate::overlay::overlay_scripts;
use crate::patch::{patch_config, PatchOutcome};
use crate::permissions::normalize_permissions;
use crate::service::{restart_service, RestartOutcome};

const CONFIRM_PROMPT: &str = "Do you want to proceed with the update?";

/// How a run ended without an error
#[derive(Debug)]
pub enum RunOutcome {
    InstallDirNotFound,
    SourceDirNotFound,
    Cancelled,
    Completed(Summary),
}

/// What a completed run changed
#[derive(Debug, Clone)]
pub struct Summary {
    pub install_dir: PathBuf,
    pub source_dir: PathBuf,
    pub backed_up: usize,
    pub replaced: usize,
    pub permissions_set: usize,
    pub config: PatchOutcome,
    /// `None` when the restart was skipped
    pub restart: Option<RestartOutcome>,
}

/// Execute the update, prompting on the console
pub fn execute(ctx: &Context) -> Result<RunOutcome> {
    execute_with(ctx, |question| Ok(crate::cli::prompt::confirm(question)?))
}

/// Execute the update with a custom confirmation source
pub fn execute_with<F>(ctx: &Context, confirm: F) -> Result<RunOutcome>
where
    F: FnOnce(&str) -> Result<bool>,
{
    let Some(install_dir) = locate_install_dir(ctx) else {
        ctx.print_warning(
            "Pwnagotchi directory not found. Please specify the correct path with --install-dir.",
        );
        return Ok(RunOutcome::InstallDirNotFound);
    };

    let Some(source_dir) = locate_source_dir(ctx) else {
        ctx.print_warning(&format!(
            "New GFX HAT files directory not found. Please place the files in a '{}' directory.",
            ctx.settings.source.dir_name
        ));
        return Ok(RunOutcome::SourceDirNotFound);
    };

    ctx.print_info(&format!(
        "Pwnagotchi directory: {}",
        install_dir.display().to_string().cyan()
    ));
    ctx.print_info(&format!(
        "New files directory: {}",
        source_dir.display().to_string().cyan()
    ));

    if !ctx.assume_yes && !confirm(CONFIRM_PROMPT)? {
        ctx.print_info("Update cancelled.");
        return Ok(RunOutcome::Cancelled);
    }

    let summary = apply(ctx, &install_dir, &source_dir)?;
    print_summary(&summary);
    ctx.print_success("Update completed. Please check if everything is working correctly.");
    Ok(RunOutcome::Completed(summary))
}

fn locate_install_dir(ctx: &Context) -> Option<PathBuf> {
    match &ctx.install_dir {
        Some(dir) => find_install_dir(std::slice::from_ref(dir)),
        None => find_install_dir(&ctx.settings.install.candidates),
    }
}

fn locate_source_dir(ctx: &Context) -> Option<PathBuf> {
    if let Some(dir) = &ctx.source_dir {
        return dir.is_dir().then(|| dir.clone());
    }
    let root = ctx.search_root.as_deref()?;
    tracing::info!(root = %root.display(), name = %ctx.settings.source.dir_name, "searching for driver files");
    find_source_dir(root, &ctx.settings.source.dir_name)
}

/// Run every mutating step in order; any error aborts the rest
fn apply(ctx: &Context, install_dir: &Path, source_dir: &Path) -> Result<Summary> {
    tracing::info!("stage: backup");
    let backup = BackupManager::new(install_dir, &ctx.settings.backup.dir_name)
        .backup_scripts()
        .context("Backup failed")?;
    ctx.print_success(&format!(
        "Backup created in {}",
        backup.backup_dir.display().to_string().cyan()
    ));

    tracing::info!("stage: overlay");
    let replaced = overlay_scripts(install_dir, source_dir, |file| {
        let name = file
            .relative
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        ctx.print_info(&format!("Replaced {}", name));
    })
    .context("Copying new files failed")?;

    tracing::info!("stage: permissions");
    let permissions_set =
        normalize_permissions(install_dir).context("Setting permissions failed")?;

    tracing::info!("stage: config");
    let config = patch_config(install_dir, &ctx.settings.display)
        .context("Updating config.toml failed")?;
    match &config {
        PatchOutcome::Patched(_) => {
            ctx.print_success("Updated config.toml with GFX HAT display settings")
        }
        PatchOutcome::NotFound(_) => {
            ctx.print_warning("config.toml not found. Please update it manually.")
        }
    }

    let restart = if ctx.restart {
        tracing::info!("stage: restart");
        let outcome = restart_service(&ctx.settings.service.command)?;
        if outcome.is_success() {
            ctx.print_success("Pwnagotchi service restarted successfully");
        } else {
            ctx.print_error(
                "Failed to restart Pwnagotchi service. You may need to reboot manually.",
            );
        }
        Some(outcome)
    } else {
        ctx.print_warning("Service restart skipped. Restart it manually to load the new driver.");
        None
    };

    Ok(Summary {
        install_dir: install_dir.to_path_buf(),
        source_dir: source_dir.to_path_buf(),
        backed_up: backup.files.len(),
        replaced: replaced.len(),
        permissions_set: permissions_set.len(),
        config,
        restart,
    })
}

fn print_summary(summary: &Summary) {
    println!();
    println!("{}", "Summary:".bold());
    println!("  {:<18} {}", "Backed up:".dimmed(), summary.backed_up);
    println!("  {:<18} {}", "Replaced:".dimmed(), summary.replaced);
    println!("  {:<18} {}", "Permissions set:".dimmed(), summary.permissions_set);
    let config = match summary.config {
        PatchOutcome::Patched(_) => "patched".green(),
        PatchOutcome::NotFound(_) => "not found".yellow(),
    };
    println!("  {:<18} {}", "config.toml:".dimmed(), config);
    let restart = match &summary.restart {
        Some(RestartOutcome::Restarted) => "restarted".green(),
        Some(_) => "failed".red(),
        None => "skipped".yellow(),
    };
    println!("  {:<18} {}", "Service:".dimmed(), restart);
    println!();
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::cli::args::Cli;
    use crate::model::Settings;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    struct Fixture {
        install: TempDir,
        home: TempDir,
    }

    fn fixture() -> Fixture {
        let install = tempdir().unwrap();
        fs::write(install.path().join("agent.py"), "old agent").unwrap();
        fs::write(
            install.path().join("config.toml"),
            "[ui]\nfps = 0.0\n\n[ui.display]\ntype = \"waveshare_2\"\ncolor = \"black\"\n",
        )
        .unwrap();

        let home = tempdir().unwrap();
        let source = home.path().join("downloads/gfx_hat");
        fs::create_dir_all(source.join("ui/hw")).unwrap();
        fs::write(source.join("agent.py"), "new agent").unwrap();
        fs::write(source.join("ui/hw/gfxhat.py"), "driver").unwrap();

        Fixture { install, home }
    }

    fn context(fx: &Fixture, restart_cmd: &[&str]) -> Context {
        let mut settings = Settings::default();
        settings.install.candidates = vec![
            fx.install.path().join("missing"),
            fx.install.path().to_path_buf(),
        ];
        settings.service.command = restart_cmd.iter().map(|s| s.to_string()).collect();
        let cli = Cli {
            search_root: Some(fx.home.path().to_path_buf()),
            ..Cli::default()
        };
        Context::new(settings, &cli)
    }

    #[test]
    fn test_full_run() {
        let fx = fixture();
        let ctx = context(&fx, &["true"]);

        let outcome = execute_with(&ctx, |_| Ok(true)).unwrap();
        let RunOutcome::Completed(summary) = outcome else {
            panic!("expected completion, got {outcome:?}");
        };

        assert_eq!(summary.backed_up, 1);
        assert_eq!(summary.replaced, 2);
        assert_eq!(summary.restart, Some(RestartOutcome::Restarted));
        assert_eq!(
            fs::read_to_string(fx.install.path().join("backup_gfx_hat/agent.py")).unwrap(),
            "old agent"
        );
        assert_eq!(
            fs::read_to_string(fx.install.path().join("agent.py")).unwrap(),
            "new agent"
        );
        assert!(fx.install.path().join("ui/hw/gfxhat.py").exists());
        let config = fs::read_to_string(fx.install.path().join("config.toml")).unwrap();
        assert!(config.contains("gfxhat"));
    }

    #[test]
    fn test_restart_failure_still_completes() {
        let fx = fixture();
        let ctx = context(&fx, &["false"]);

        let outcome = execute_with(&ctx, |_| Ok(true)).unwrap();
        let RunOutcome::Completed(summary) = outcome else {
            panic!("expected completion, got {outcome:?}");
        };
        assert_eq!(summary.restart, Some(RestartOutcome::Failed(Some(1))));
    }

    #[test]
    fn test_refusal_changes_nothing() {
        let fx = fixture();
        let ctx = context(&fx, &["true"]);

        let outcome = execute_with(&ctx, |_| Ok(false)).unwrap();

        assert!(matches!(outcome, RunOutcome::Cancelled));
        assert!(!fx.install.path().join("backup_gfx_hat").exists());
        assert_eq!(
            fs::read_to_string(fx.install.path().join("agent.py")).unwrap(),
            "old agent"
        );
    }

    #[test]
    fn test_missing_install_dir() {
        let fx = fixture();
        let mut ctx = context(&fx, &["true"]);
        ctx.settings.install.candidates = vec![fx.install.path().join("nowhere")];

        let outcome = execute_with(&ctx, |_| panic!("must not prompt")).unwrap();
        assert!(matches!(outcome, RunOutcome::InstallDirNotFound));
    }

    #[test]
    fn test_missing_source_dir() {
        let fx = fixture();
        let mut ctx = context(&fx, &["true"]);
        ctx.settings.source.dir_name = "gfx_hat_missing".to_string();

        let outcome = execute_with(&ctx, |_| panic!("must not prompt")).unwrap();
        assert!(matches!(outcome, RunOutcome::SourceDirNotFound));
    }

    #[test]
    fn test_no_restart_skips_service() {
        let fx = fixture();
        let mut ctx = context(&fx, &["false"]);
        ctx.restart = false;
        ctx.assume_yes = true;

        let outcome = execute_with(&ctx, |_| panic!("must not prompt")).unwrap();
        let RunOutcome::Completed(summary) = outcome else {
            panic!("expected completion, got {outcome:?}");
        };
        assert_eq!(summary.restart, None);
    }

    #[test]
    fn test_malformed_config_aborts() {
        let fx = fixture();
        fs::write(fx.install.path().join("config.toml"), "[ui\n").unwrap();
        let ctx = context(&fx, &["true"]);

        let err = execute_with(&ctx, |_| Ok(true)).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
