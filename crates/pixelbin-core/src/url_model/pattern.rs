//! Operation-chain grammar: `plugin.op(k:v,k:v)~p:op(k:v)~...`.

use super::descriptor::{OperationDescriptor, Param};
use crate::error::UrlError;

pub const OPERATION_SEPARATOR: char = '~';
pub const PARAMETER_SEPARATOR: char = ',';

/// Plugin id of built-in operations, encoded as `p:name(...)`.
pub const BASIC_PLUGIN: &str = "p";

/// Parses a pattern string into its ordered operations.
///
/// The caller filters out the literal `original`; an empty string yields no operations.
pub fn parse_pattern(pattern: &str) -> Result<Vec<OperationDescriptor>, UrlError> {
    if pattern.is_empty() {
        return Ok(Vec::new());
    }
    pattern
        .split(OPERATION_SEPARATOR)
        .map(parse_operation)
        .collect()
}

fn parse_operation(token: &str) -> Result<OperationDescriptor, UrlError> {
    let open = token.find('(');
    let head = match open {
        Some(i) => &token[..i],
        None => token,
    };

    let (plugin, name) = if token.starts_with("p:") {
        head.split_once(':')
    } else {
        head.split_once('.')
    }
    .filter(|(plugin, name)| !plugin.is_empty() && !name.is_empty())
    .ok_or_else(|| UrlError::InvalidUrl(format!("invalid operation '{token}'")))?;

    let values = match open {
        Some(i) => parse_params(param_body(&token[i + 1..])),
        None => None,
    };

    Ok(OperationDescriptor {
        plugin: plugin.to_string(),
        name: name.to_string(),
        values,
    })
}

/// Text up to the `)` matching an already-consumed `(`, or the rest when unbalanced.
fn param_body(after_open: &str) -> &str {
    let mut depth = 0usize;
    for (i, c) in after_open.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return &after_open[..i],
            ')' => depth -= 1,
            _ => {}
        }
    }
    after_open
}

fn parse_params(body: &str) -> Option<Vec<Param>> {
    let body = body.strip_prefix('-').unwrap_or(body);
    let params: Vec<Param> = body
        .split(PARAMETER_SEPARATOR)
        .filter_map(|item| item.split_once(':'))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| Param::new(key, value))
        .collect();
    if params.is_empty() {
        None
    } else {
        Some(params)
    }
}

/// Formats operations into a pattern string. Operations without a name are dropped.
///
/// Built-in (`p`) operations omit the parentheses when they have no
/// parameters; every other plugin always carries them.
pub fn format_pattern(operations: &[OperationDescriptor]) -> Result<String, UrlError> {
    let mut tokens = Vec::with_capacity(operations.len());
    for op in operations.iter().filter(|op| !op.name.is_empty()) {
        tokens.push(format_operation(op)?);
    }
    Ok(tokens.join(&OPERATION_SEPARATOR.to_string()))
}

fn format_operation(op: &OperationDescriptor) -> Result<String, UrlError> {
    if op.plugin.is_empty() {
        return Err(UrlError::IllegalArgument(format!(
            "plugin not specified in '{}'",
            op.name
        )));
    }
    let mut rendered = Vec::new();
    for param in op.values.iter().flatten() {
        if param.key.is_empty() {
            return Err(UrlError::IllegalArgument(format!(
                "key not specified in '{}'",
                op.name
            )));
        }
        if param.value.is_empty() {
            return Err(UrlError::IllegalArgument(format!(
                "value not specified for '{}' in '{}'",
                param.key, op.name
            )));
        }
        rendered.push(format!("{}:{}", param.key, param.value));
    }
    let params = rendered.join(&PARAMETER_SEPARATOR.to_string());

    if op.plugin == BASIC_PLUGIN {
        if params.is_empty() {
            Ok(format!("p:{}", op.name))
        } else {
            Ok(format!("p:{}({})", op.name, params))
        }
    } else {
        Ok(format!("{}.{}({})", op.plugin, op.name, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chain_in_order() {
        let ops = parse_pattern("t.flip()~t.flop()").unwrap();
        assert_eq!(
            ops,
            vec![
                OperationDescriptor::new("t", "flip"),
                OperationDescriptor::new("t", "flop")
            ]
        );
    }

    #[test]
    fn parses_params_keeping_order() {
        let ops = parse_pattern("t.resize(w:100,h:200,w:300)").unwrap();
        let expected = OperationDescriptor::new("t", "resize")
            .with_param("w", "100")
            .with_param("h", "200")
            .with_param("w", "300");
        assert_eq!(ops, vec![expected]);
    }

    #[test]
    fn parses_basic_plugin() {
        let ops = parse_pattern("p:resize(w:100)~p:grayscale").unwrap();
        assert_eq!(
            ops,
            vec![
                OperationDescriptor::new("p", "resize").with_param("w", "100"),
                OperationDescriptor::new("p", "grayscale"),
            ]
        );
    }

    #[test]
    fn bare_operation_and_positional_params() {
        let ops = parse_pattern("erase.bg").unwrap();
        assert_eq!(ops, vec![OperationDescriptor::new("erase", "bg")]);

        // Pieces without ':' and empty keys are discarded.
        let ops = parse_pattern("t.blur(5,:x)").unwrap();
        assert_eq!(ops[0].values, None);
    }

    #[test]
    fn value_keeps_text_after_first_colon_and_leading_dash_is_stripped() {
        let ops = parse_pattern("t.merge(-m:overlay,u:https://x.io/a.png)").unwrap();
        assert_eq!(
            ops[0].values.as_deref().unwrap(),
            &[
                Param::new("m", "overlay"),
                Param::new("u", "https://x.io/a.png")
            ]
        );
    }

    #[test]
    fn unbalanced_parenthesis_reads_to_end() {
        let ops = parse_pattern("t.resize(w:100,h:50").unwrap();
        assert_eq!(
            ops[0].values.as_deref().unwrap(),
            &[Param::new("w", "100"), Param::new("h", "50")]
        );
    }

    #[test]
    fn invalid_tokens_fail() {
        assert!(matches!(parse_pattern("flip"), Err(UrlError::InvalidUrl(_))));
        assert!(matches!(parse_pattern("t.flip()~~t.flop()"), Err(UrlError::InvalidUrl(_))));
        assert!(matches!(parse_pattern(".flip()"), Err(UrlError::InvalidUrl(_))));
    }

    #[test]
    fn formats_chain_with_asymmetric_parentheses() {
        let ops = vec![
            OperationDescriptor::new("t", "flip"),
            OperationDescriptor::new("p", "grayscale"),
            OperationDescriptor::new("p", "resize").with_param("w", "100"),
        ];
        assert_eq!(
            format_pattern(&ops).unwrap(),
            "t.flip()~p:grayscale~p:resize(w:100)"
        );
    }

    #[test]
    fn formats_empty_and_nameless() {
        assert_eq!(format_pattern(&[]).unwrap(), "");
        let ops = vec![
            OperationDescriptor::new("t", ""),
            OperationDescriptor::new("t", "flop"),
        ];
        assert_eq!(format_pattern(&ops).unwrap(), "t.flop()");
    }

    #[test]
    fn format_rejects_empty_key_or_value() {
        let missing_value = OperationDescriptor::new("t", "resize").with_param("w", "");
        match format_pattern(&[missing_value]) {
            Err(UrlError::IllegalArgument(msg)) => {
                assert_eq!(msg, "value not specified for 'w' in 'resize'")
            }
            other => panic!("expected IllegalArgument, got {other:?}"),
        }

        let missing_key = OperationDescriptor::new("t", "resize").with_param("", "100");
        match format_pattern(&[missing_key]) {
            Err(UrlError::IllegalArgument(msg)) => assert_eq!(msg, "key not specified in 'resize'"),
            other => panic!("expected IllegalArgument, got {other:?}"),
        }
    }

    #[test]
    fn format_rejects_named_operation_without_plugin() {
        let op = OperationDescriptor::new("", "flip");
        assert_eq!(
            format_pattern(&[op]),
            Err(UrlError::IllegalArgument("plugin not specified in 'flip'".into()))
        );
    }
}
