use anyhow::Context as _;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use topica_core::RuleTable;
use topica_store::{Settings, DEFAULT_SLOT};

/// Store root plus the settings read from it, resolved once per invocation.
pub struct Context {
    pub root: PathBuf,
    pub settings: Settings,
}

impl Context {
    pub fn at(root: PathBuf) -> anyhow::Result<Self> {
        let settings = Settings::load(&root)?;
        tracing::debug!(root = %root.display(), ?settings, "resolved store");
        Ok(Self { root, settings })
    }

    /// Slot key: flag, then config, then the default.
    pub fn slot<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.or(self.settings.slot.as_deref())
            .unwrap_or(DEFAULT_SLOT)
    }

    /// Rule table: `--rules` file, then the `rules` config key, then built-in.
    pub fn rule_table(&self, flag: Option<&Path>) -> anyhow::Result<RuleTable> {
        match flag.or(self.settings.rules.as_deref()) {
            Some(path) => {
                let table = RuleTable::load(path)
                    .with_context(|| format!("cannot use rule table {}", path.display()))?;
                tracing::debug!(path = %path.display(), rules = table.rules().len(), "loaded rule table");
                Ok(table)
            }
            None => Ok(RuleTable::builtin()),
        }
    }

    /// Color when forced by config, otherwise on a terminal without `NO_COLOR`.
    pub fn color(&self) -> bool {
        self.settings.color.unwrap_or_else(|| {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        })
    }
}
