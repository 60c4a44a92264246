//! Template expansion for submitted messages
//!
//! Templates use positional placeholders: `{0}`, `{1}`, ... refer to the
//! argument at that index, a bare `{}` takes the next argument in order,
//! and `{{` / `}}` produce literal braces.

use super::error::{LoggerError, Result};
use std::fmt::{Display, Write};

/// Turns a template and its positional arguments into one message
pub trait Formatter: Send + Sync {
    fn format(&self, template: &str, args: &[&dyn Display]) -> Result<String>;
}

/// Positional placeholder substitution
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl DefaultFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for DefaultFormatter {
    fn format(&self, template: &str, args: &[&dyn Display]) -> Result<String> {
        if args.is_empty() && !template.contains(['{', '}']) {
            return Ok(template.to_string());
        }

        let mut out = String::with_capacity(template.len() + args.len() * 8);
        let mut chars = template.char_indices().peekable();
        let mut next_implicit = 0usize;

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' => {
                    if matches!(chars.peek(), Some((_, '{'))) {
                        chars.next();
                        out.push('{');
                        continue;
                    }

                    let mut spec = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        spec.push(inner);
                    }
                    if !closed {
                        return Err(LoggerError::format(
                            template,
                            format!("unclosed placeholder at byte {}", pos),
                        ));
                    }

                    let index = if spec.trim().is_empty() {
                        let index = next_implicit;
                        next_implicit += 1;
                        index
                    } else {
                        spec.trim().parse::<usize>().map_err(|_| {
                            LoggerError::format(template, format!("invalid placeholder '{{{}}}'", spec))
                        })?
                    };

                    let arg = args.get(index).ok_or_else(|| {
                        LoggerError::format(
                            template,
                            format!("argument index {} out of range ({} given)", index, args.len()),
                        )
                    })?;
                    write!(out, "{}", arg).map_err(|e| LoggerError::format(template, e.to_string()))?;
                }
                '}' => {
                    if matches!(chars.peek(), Some((_, '}'))) {
                        chars.next();
                        out.push('}');
                    } else {
                        return Err(LoggerError::format(
                            template,
                            format!("unmatched '}}' at byte {}", pos),
                        ));
                    }
                }
                _ => out.push(c),
            }
        }

        Ok(out)
    }
}
