//! Parsing of `name(type,type,...)` signatures and remapping of shielded
//! type names to their standard ABI counterparts.

use crate::error::AbiError;

/// A parsed function signature: its name and the raw text of each
/// top-level parameter type (still possibly shielded, still possibly a
/// `tuple(...)` or array).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSignature {
    /// The function name, e.g. `setNumber`.
    pub name: String,
    /// Each parameter's raw type text, e.g. `["suint256"]`.
    pub params: Vec<String>,
}

impl ParsedSignature {
    /// Parses `sig` as `name(params)`. The parameter list is split on
    /// top-level commas only — commas inside a nested `tuple(...)` don't
    /// count as separators.
    pub fn parse(sig: &str) -> Result<Self, AbiError> {
        let open = sig.find('(').ok_or_else(|| AbiError::MalformedSignature(sig.to_string()))?;
        if !sig.ends_with(')') {
            return Err(AbiError::MalformedSignature(sig.to_string()));
        }
        let name = sig[..open].to_string();
        let inner = &sig[open + 1..sig.len() - 1];
        let params = if inner.is_empty() { Vec::new() } else { split_top_level_commas(inner)? };
        Ok(Self { name, params })
    }

    /// The standard (unshielded) signature: same name, each parameter
    /// remapped via [`remap_type`].
    pub fn standard_signature(&self) -> String {
        let remapped: Vec<String> = self.params.iter().map(|p| remap_type(p)).collect();
        format!("{}({})", self.name, remapped.join(","))
    }
}

/// Splits a parameter list on commas that are not nested inside `(` `)`
/// brackets (tuples). `[` `]` never change nesting depth on their own
/// since array suffixes don't contain commas.
fn split_top_level_commas(s: &str) -> Result<Vec<String>, AbiError> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(AbiError::UnbalancedParens(s.to_string()));
                }
            }
            ',' if depth == 0 => {
                parts.push(s[start..i].to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(AbiError::UnbalancedParens(s.to_string()));
    }
    parts.push(s[start..].to_string());
    Ok(parts)
}

/// Strips a trailing run of `[]` / `[k]` array suffixes, returning the
/// base type text and the suffix text separately.
fn split_array_suffix(ty: &str) -> (&str, &str) {
    let bytes = ty.as_bytes();
    let mut end = bytes.len();
    while end > 0 && bytes[end - 1] == b']' {
        let Some(open) = ty[..end].rfind('[') else { break };
        end = open;
    }
    (&ty[..end], &ty[end..])
}

/// Remaps a single (possibly array- or tuple-wrapped) shielded type name
/// to its standard equivalent, per the remapping table above. Array and
/// tuple structure is preserved; only leaf type names change.
pub fn remap_type(ty: &str) -> String {
    let ty = ty.trim();
    let (base, suffix) = split_array_suffix(ty);
    if let Some(inner) = base.strip_prefix("tuple(").and_then(|b| b.strip_suffix(')')) {
        let components = split_top_level_commas(inner).unwrap_or_default();
        let remapped: Vec<String> = components.iter().map(|c| remap_type(c)).collect();
        format!("tuple({}){}", remapped.join(","), suffix)
    } else {
        format!("{}{}", remap_leaf(base), suffix)
    }
}

/// Remaps a single leaf type name with no array or tuple wrapping.
fn remap_leaf(base: &str) -> String {
    if base == "sbool" {
        "bool".to_string()
    } else if base == "saddress" {
        "address".to_string()
    } else if let Some(width) = base.strip_prefix("suint") {
        format!("uint{width}")
    } else if let Some(width) = base.strip_prefix("sint") {
        format!("int{width}")
    } else {
        base.to_string()
    }
}

/// `true` if `ty` (or any component, if it's a tuple) is a shielded type
/// name. A tuple is shielded iff any of its components is.
pub fn is_shielded(ty: &str) -> bool {
    let ty = ty.trim();
    let (base, _suffix) = split_array_suffix(ty);
    if let Some(inner) = base.strip_prefix("tuple(").and_then(|b| b.strip_suffix(')')) {
        split_top_level_commas(inner).unwrap_or_default().iter().any(|c| is_shielded(c))
    } else {
        base.starts_with("sbool")
            || base.starts_with("saddress")
            || base.starts_with("suint")
            || base.starts_with("sint")
    }
}
