//! Loads a directory of C# sources as one project.
//!
//! Files are discovered with `walkdir` and filtered through the configured
//! globs, parsed in parallel on a dedicated rayon pool (one parser per
//! worker), resolved together as a single compilation, and then extracted
//! one unit at a time so a [`CancellationToken`] can stop the run between
//! units.

mod cancel;

pub use cancel::CancellationToken;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use tracing::{debug, info, warn};
use tree_sitter::Parser;
use walkdir::WalkDir;

use crate::config::FactsConfig;
use crate::error::ExtractionError;
use crate::extractor::FactExtractor;
use crate::language::Language;
use crate::models::{CompilationUnitType, ProjectModel};
use crate::semantic::{CompilationMaker, SyntaxTree, parse_with};

/// A parsed source file, path kept relative to the project root.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub tree: Arc<SyntaxTree>,
}

pub struct ProjectLoader {
    config: FactsConfig,
    extractor: FactExtractor,
}

impl ProjectLoader {
    pub fn new(config: FactsConfig) -> Self {
        Self {
            config,
            extractor: FactExtractor::new(),
        }
    }

    pub fn with_extractor(mut self, extractor: FactExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &FactsConfig {
        &self.config
    }

    /// Discover, parse and extract every source file under `root`.
    pub fn load(&self, root: &Path, cancel: &CancellationToken) -> Result<ProjectModel> {
        if !root.is_dir() {
            return Err(anyhow!("{} is not a directory", root.display()));
        }
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());
        let mut project = ProjectModel::new(name, root.display().to_string(), Language::CSharp);

        let files = self.discover_files(root)?;
        info!("Found {} source files in {}", files.len(), root.display());
        let sources = self.parse_files(root, &files)?;

        let mut maker = CompilationMaker::default();
        for source in &sources {
            maker.add_tree(&source.tree);
        }
        let compilation = maker.compilation();

        for source in &sources {
            if cancel.is_cancelled() {
                info!(
                    "Extraction cancelled after {} of {} units",
                    project.compilation_units.len(),
                    sources.len()
                );
                break;
            }
            let semantic = compilation.semantic_model(&source.tree);
            match self.extractor.extract(&source.tree, &semantic) {
                Ok(mut unit) => {
                    unit.set_file_path(&source.relative_path);
                    project.add_compilation_unit(unit);
                }
                Err(e) => warn!("Skipping {}: {}", source.relative_path, e),
            }
        }

        info!(
            "Extracted {} compilation units into {} namespaces",
            project.compilation_units.len(),
            project.namespaces.len()
        );
        Ok(project)
    }

    /// Files under `root` matching the include globs and none of the
    /// exclude globs, within the size limit, sorted by path.
    pub fn discover_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let include = self.config.include_set()?;
        let exclude = self.config.exclude_set()?;
        let mut files = Vec::new();

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = relative_path(root, entry.path());
            if !include.is_match(&relative) || exclude.is_match(&relative) {
                continue;
            }
            match entry.metadata() {
                Ok(metadata) if metadata.len() > self.config.max_file_size => {
                    warn!(
                        "Skipping {} ({} bytes exceeds limit of {})",
                        relative,
                        metadata.len(),
                        self.config.max_file_size
                    );
                    continue;
                }
                Err(e) => {
                    warn!("Skipping {}: {}", relative, e);
                    continue;
                }
                Ok(_) => {}
            }
            files.push(entry.path().to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Parse `files` in parallel. Unreadable and empty files are skipped.
    pub fn parse_files(&self, root: &Path, files: &[PathBuf]) -> Result<Vec<SourceFile>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.worker_count())
            .build()
            .map_err(|e| anyhow!("Failed to build thread pool: {}", e))?;

        let parsed: Vec<Option<SourceFile>> = pool.install(|| {
            files
                .par_iter()
                .map_init(Parser::new, |parser, path| parse_file(parser, root, path))
                .collect()
        });
        Ok(parsed.into_iter().flatten().collect())
    }
}

fn parse_file(parser: &mut Parser, root: &Path, path: &Path) -> Option<SourceFile> {
    let relative = relative_path(root, path);
    let language = Language::from_path(path).unwrap_or(Language::CSharp);
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {}: {}", relative, e);
            return None;
        }
    };
    match parse_with(parser, &content, language) {
        Ok(tree) => Some(SourceFile {
            path: path.to_path_buf(),
            relative_path: relative,
            tree: Arc::new(tree),
        }),
        Err(ExtractionError::EmptyContent) => {
            debug!("Skipping empty file {}", relative);
            None
        }
        Err(e) => {
            warn!("Failed to parse {}: {}", relative, e);
            None
        }
    }
}

/// Forward-slash path of `path` relative to `root`.
fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Extract a single file compiled on its own.
pub fn extract_file(path: &Path, extractor: &FactExtractor) -> Result<CompilationUnitType> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let language = Language::from_path(path).unwrap_or(Language::CSharp);
    let tree = Arc::new(
        crate::semantic::create_syntactic_model(&content, language)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
    );
    let semantic = CompilationMaker::default().create_semantic_model(&tree);
    let mut unit = extractor
        .extract(&tree, &semantic)
        .with_context(|| format!("Failed to extract {}", path.display()))?;
    unit.set_file_path(&path.to_string_lossy());
    Ok(unit)
}
