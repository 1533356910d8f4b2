//! Whole-file conversion.
//!
//! Parse once, translate every function declaration in source order and
//! concatenate the results. The first failing declaration fails the whole
//! conversion and nothing is emitted.

use std::path::Path;

use gocpp_ir::{FuncDecl, Item, SourceFile, SourceText};
use gocpp_translate::{translate_function, TranslateError, TranslateOptions, Translation};
use rayon::prelude::*;

use crate::emitter::{Emitter, FileEmitter, StringEmitter};
use crate::ConvertError;

/// Knobs for a conversion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub translate: TranslateOptions,
    /// Translate declarations on a worker pool. Output order is unchanged.
    pub parallel: bool,
}

impl ConvertOptions {
    #[must_use]
    pub fn with_translate(mut self, translate: TranslateOptions) -> Self {
        self.translate = translate;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// One translated function declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertedFunction {
    pub name: String,
    pub translation: Translation,
}

/// Result of converting one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOutput {
    /// Concatenated C++ text of every function, in source order.
    pub text: String,
    pub functions: Vec<ConvertedFunction>,
}

impl ConvertOutput {
    /// True if any function was only approximately translated.
    pub fn is_degraded(&self) -> bool {
        self.functions.iter().any(|f| f.translation.is_degraded())
    }
}

/// Convert Go source text held in memory.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len(), parallel = options.parallel))]
pub fn convert_source(source: &str, options: &ConvertOptions) -> Result<ConvertOutput, ConvertError> {
    let file = parse(source)?;
    let mut emitter = StringEmitter::with_capacity(source.len());
    let functions = translate_file(&file, source, options, &mut emitter)?;
    Ok(ConvertOutput {
        text: emitter.output(),
        functions,
    })
}

/// Convert the Go file at `src` and write the C++ text to `dst`.
///
/// The destination is created (or truncated) once `src` has been read and
/// parsed, before any declaration is translated. If a declaration fails,
/// the destination is left empty.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(src = %src.display(), dst = %dst.display(), parallel = options.parallel)
)]
pub fn convert_file(dst: &Path, src: &Path, options: &ConvertOptions) -> Result<ConvertOutput, ConvertError> {
    let source = std::fs::read_to_string(src).map_err(|source| {
        tracing::error!(path = %src.display(), "{source}");
        ConvertError::Read {
            path: src.to_path_buf(),
            source,
        }
    })?;
    let file = parse(&source)?;

    let write_error = |source| {
        tracing::error!(path = %dst.display(), "{source}");
        ConvertError::Write {
            path: dst.to_path_buf(),
            source,
        }
    };
    let mut emitter = FileEmitter::create(dst).map_err(write_error)?;
    let mut text = StringEmitter::with_capacity(source.len());
    let functions = translate_file(&file, &source, options, &mut text)?;
    let text = text.output();
    emitter.emit(&text);
    emitter.finish().map_err(write_error)?;

    Ok(ConvertOutput { text, functions })
}

fn parse(source: &str) -> Result<SourceFile, ConvertError> {
    gocpp_parse::parse(source).map_err(|error| {
        tracing::error!(span = ?error.span(), "{error}");
        ConvertError::Parse(error)
    })
}

/// Translate every function of `file` and emit the results in order.
///
/// Nothing reaches `emitter` unless every declaration translates.
fn translate_file(
    file: &SourceFile,
    source: &str,
    options: &ConvertOptions,
    emitter: &mut impl Emitter,
) -> Result<Vec<ConvertedFunction>, ConvertError> {
    for item in &file.items {
        if let Item::Other { kind, span } = item {
            tracing::debug!(kind, %span, "skipping top-level declaration");
        }
    }
    let functions: Vec<&FuncDecl> = file.functions().collect();

    let src = SourceText::new(source);
    let results = translate_all(&functions, &src, options);

    let mut converted = Vec::with_capacity(functions.len());
    for (func, result) in functions.iter().zip(results) {
        let name = &func.name.name;
        let translation = result.map_err(|source| {
            tracing::error!(function = %name, code = %source.code(), "{source}");
            ConvertError::Translate {
                function: name.clone(),
                source,
            }
        })?;
        for degradation in translation.degradations() {
            tracing::warn!(
                function = %name,
                reason = ?degradation.reason,
                span = %degradation.span,
                "approximate translation of `{}`",
                degradation.text
            );
        }
        tracing::debug!(function = %name, degraded = translation.is_degraded(), "translated declaration");
        converted.push(ConvertedFunction {
            name: name.clone(),
            translation,
        });
    }

    for function in &converted {
        emitter.emit(function.translation.text());
    }
    Ok(converted)
}

/// Translate each declaration, returning results in input order.
fn translate_all(
    functions: &[&FuncDecl],
    src: &SourceText<'_>,
    options: &ConvertOptions,
) -> Vec<Result<Translation, TranslateError>> {
    let translate = |func: &&FuncDecl| translate_function(func, src, options.translate);
    if !options.parallel || functions.len() < 2 {
        return functions.iter().map(translate).collect();
    }

    // A scoped pool is torn down before returning, so no worker threads
    // outlive the conversion.
    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| functions.par_iter().map(translate).collect::<Vec<_>>())
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), translating sequentially");
            functions.iter().map(translate).collect()
        })
}
