//! Function declaration translation.

use gocpp_ir::{FieldList, FuncDecl, SourceText};

use crate::{map_type, Scope, TranslateError, TranslateOptions, TranslateResult, Translation, Translator};

/// Return type of a function without results.
const VOID: &str = "void";

/// Body emitted for a declaration without one.
const EMPTY_BODY: &str = "{\n}";

/// Translate one function declaration.
///
/// Produces `<ret> <name>(<params>) <body>\n`, or the first error met while
/// walking the result list, the parameters and then the body. Each call has
/// its own scopes and degradations; nothing carries over between
/// declarations.
#[tracing::instrument(level = "debug", skip_all, fields(function = %func.name.name))]
pub fn translate_function(
    func: &FuncDecl,
    src: &SourceText<'_>,
    options: TranslateOptions,
) -> TranslateResult<Translation> {
    let mut translator = Translator::new(src, options);
    let text = translator.translate_func_decl(func)?;
    Ok(Translation::new(text, translator.take_degradations()))
}

impl Translator<'_, '_> {
    pub fn translate_func_decl(&mut self, func: &FuncDecl) -> TranslateResult<String> {
        let ret = match &func.results {
            Some(results) => self.translate_results(results)?,
            None => VOID,
        };

        // Parameters live in the function scope, which is the parent of the
        // body block under the chained policy.
        let mut scope = Scope::root(self.options.scope_policy);
        let mut params = Vec::with_capacity(func.params.arity());
        for field in &func.params.fields {
            let ty = map_type(&field.ty, self.src)?;
            if field.names.is_empty() {
                return Err(TranslateError::MissingParameterName {
                    text: self.text_of(field),
                    span: field.span,
                });
            }
            for name in &field.names {
                scope.declare(name)?;
                params.push(format!("{ty} {}", name.name));
            }
        }

        let body = match &func.body {
            Some(body) => self.translate_block(body, &scope)?,
            None => EMPTY_BODY.to_string(),
        };

        Ok(format!("{ret} {}({}) {body}\n", func.name.name, params.join(", ")))
    }

    fn translate_results(&self, results: &FieldList) -> TranslateResult<&'static str> {
        match results.arity() {
            0 => Ok(VOID),
            1 => map_type(&results.fields[0].ty, self.src),
            _ => Err(TranslateError::MultipleReturnTypesUnsupported {
                text: self.text_of(results),
                span: results.span,
            }),
        }
    }
}

#[cfg(test)]
mod tests;
