use hrdesk_core::{
    ActivityLogger, BugReportWidget, Clock, CommandPalette, Config, IdleWatcher, SystemClock,
};
use hrdesk_store::{FileStore, Paths, PersistenceAdapter};
use std::path::Path;
use std::sync::Arc;

/// Resolved paths, validated config and the file-backed store
pub struct App {
    pub paths: Paths,
    pub config: Config,
    pub adapter: PersistenceAdapter,
    pub clock: Arc<dyn Clock>,
}

impl App {
    pub fn load(data_dir: Option<&Path>) -> anyhow::Result<Self> {
        let paths = match data_dir {
            Some(dir) => Paths::with_data_dir(dir),
            None => Paths::new()?,
        };

        let config = Config::load(&paths.config_file())?;
        config.validate()?;

        let store = FileStore::new(paths.storage_dir());
        tracing::debug!(dir = %store.dir().display(), "using file store");

        Ok(Self {
            adapter: PersistenceAdapter::new(Arc::new(store)),
            paths,
            config,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn activity_logger(&self) -> ActivityLogger {
        ActivityLogger::new(self.adapter.clone(), self.clock.clone())
            .with_key(&self.config.activity_log_key)
    }

    pub fn bug_widget(&self) -> BugReportWidget {
        BugReportWidget::new(
            self.adapter.clone(),
            self.clock.clone(),
            &self.config.user_agent,
        )
        .with_key(&self.config.bug_reports_key)
    }

    pub fn palette(&self) -> CommandPalette {
        CommandPalette::new(self.config.commands.clone())
    }

    pub fn idle_watcher(&self) -> IdleWatcher {
        IdleWatcher::new(self.config.idle)
    }
}
