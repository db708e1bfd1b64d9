//! Entry conventions a sandbox folder can follow.
//!
//! A folder declares its framework by which `index.*` file it contains.
//! Conventions are probed in a fixed order and the first match wins, so a
//! folder holding both `index.tsx` and `index.html` is served as a React app.

use std::fmt;
use std::path::Path;

/// File name prefix reserved for generated bootstrap modules.
pub const SYNTHETIC_ENTRY_PREFIX: &str = "__entry.";

/// Id of the element every synthesized page mounts into.
pub const ROOT_ELEMENT_ID: &str = "root";

/// Recognized entry files, in probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryConvention {
    /// `index.tsx` default-exporting a React component
    ReactTsx,
    /// `index.jsx` default-exporting a React component
    ReactJsx,
    /// `index.vue` single-file component
    Vue,
    /// Hand-written `index.html`, served untouched
    Html,
}

impl EntryConvention {
    /// Every convention in probe order.
    pub const ALL: [EntryConvention; 4] = [
        EntryConvention::ReactTsx,
        EntryConvention::ReactJsx,
        EntryConvention::Vue,
        EntryConvention::Html,
    ];

    /// File the convention is recognized by.
    pub fn source_file(self) -> &'static str {
        match self {
            EntryConvention::ReactTsx => "index.tsx",
            EntryConvention::ReactJsx => "index.jsx",
            EntryConvention::Vue => "index.vue",
            EntryConvention::Html => "index.html",
        }
    }

    /// Name of the generated bootstrap module, `None` for static HTML.
    ///
    /// The extension follows the syntax of the bootstrap source: JSX for the
    /// React conventions, plain TypeScript for Vue.
    pub fn entry_file(self) -> Option<&'static str> {
        match self {
            EntryConvention::ReactTsx => Some("__entry.tsx"),
            EntryConvention::ReactJsx => Some("__entry.jsx"),
            EntryConvention::Vue => Some("__entry.ts"),
            EntryConvention::Html => None,
        }
    }

    /// Source of the bootstrap module that mounts the folder's component.
    pub fn bootstrap_source(self) -> Option<String> {
        match self {
            EntryConvention::ReactTsx | EntryConvention::ReactJsx => Some(format!(
                "import React from 'react';\n\
                 import {{ createRoot }} from 'react-dom/client';\n\
                 import App from './{source}';\n\
                 \n\
                 const root = createRoot(document.getElementById('{root}'));\n\
                 root.render(<App />);\n",
                source = self.source_file(),
                root = ROOT_ELEMENT_ID,
            )),
            EntryConvention::Vue => Some(format!(
                "import {{ createApp }} from 'vue';\n\
                 import App from './{source}';\n\
                 \n\
                 createApp(App).mount('#{root}');\n",
                source = self.source_file(),
                root = ROOT_ELEMENT_ID,
            )),
            EntryConvention::Html => None,
        }
    }

    /// Probe `folder` and return the first convention whose file exists.
    pub async fn detect(folder: &Path) -> Option<Self> {
        for convention in Self::ALL {
            let candidate = folder.join(convention.source_file());
            if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
                return Some(convention);
            }
        }
        None
    }

    /// Blocking variant of [`EntryConvention::detect`] for CLI reporting.
    pub fn detect_blocking(folder: &Path) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|convention| folder.join(convention.source_file()).exists())
    }
}

impl fmt::Display for EntryConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryConvention::ReactTsx => "react (index.tsx)",
            EntryConvention::ReactJsx => "react (index.jsx)",
            EntryConvention::Vue => "vue (index.vue)",
            EntryConvention::Html => "static (index.html)",
        };
        f.write_str(label)
    }
}

/// Whether `file_name` is reserved for a generated bootstrap module.
pub fn is_synthetic_entry(file_name: &str) -> bool {
    file_name.starts_with(SYNTHETIC_ENTRY_PREFIX)
}
