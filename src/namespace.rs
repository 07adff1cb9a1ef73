// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Graph-wide id prefixing.
//!
//! Renaming an id without rewriting every reference to it silently breaks
//! gradients, filters, clip paths and stylesheet rules, so both changes
//! happen in one pass over the tree: ids first, then every known reference
//! form against the collected old-to-new mapping.

use std::collections::HashMap;

use simplecss::{Token, Tokenizer};

use crate::{AttributeId, Document, ElementId, Error, NodeType, QName};

/// Prefixes every element id in `doc` and rewrites all references.
///
/// Covered reference forms: `<style>` stylesheet text (id selectors and
/// `url()` values), fragment-only href values, functional IRI values in
/// presentation attributes and the accessibility label list.
pub(crate) fn apply(doc: &mut Document, prefix: &str) -> Result<(), Error> {
    let nodes: Vec<_> = doc.descendants(doc.root()).collect();

    let mut mapping = HashMap::new();
    for &node in &nodes {
        if doc.is_element(node) && doc.has_id(node) {
            let old = doc.id(node).to_string();
            let new = format!("{}{}", prefix, old);
            doc.set_id(node, new.clone());
            mapping.insert(old, new);
        }
    }

    if mapping.is_empty() {
        return Ok(());
    }

    // Longest ids first, so '#abc' is never torn apart by a mapped 'a'.
    let mut ordered: Vec<(&str, &str)> = mapping.iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));

    for &node in &nodes {
        if !doc.is_element(node) {
            continue;
        }

        if doc.has_tag_name(node, ElementId::Style) {
            let text_node = doc.children(node)
                .find(|&n| doc.node_type(n) == NodeType::Text);
            if let Some(text_node) = text_node {
                let rewritten = rewrite_stylesheet(doc.text(text_node), &mapping, &ordered)?;
                doc.set_text(text_node, rewritten);
            }
            continue;
        }

        for attr in doc.attributes_mut(node).iter_mut() {
            let aid = match attr.name {
                QName::Id(aid) => aid,
                QName::Name(_) => continue,
            };

            match aid {
                AttributeId::Href => {
                    rewrite_href(&mut attr.value, &mapping);
                }
                AttributeId::AriaLabelledBy => {
                    attr.value = attr.value
                        .split_whitespace()
                        .map(|token| match mapping.get(token) {
                            Some(new) => new.as_str(),
                            None => token,
                        })
                        .collect::<Vec<_>>()
                        .join(" ");
                }
                _ if aid.is_func_iri_target() => {
                    attr.value = rewrite_func_iri(&attr.value, &mapping);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Rewrites a fragment-only href in place. Exact matches only; data URIs
/// and external references pass through untouched.
fn rewrite_href(value: &mut String, mapping: &HashMap<String, String>) {
    if value.starts_with("data:") {
        return;
    }

    if let Some(fragment) = value.strip_prefix('#') {
        if let Some(new) = mapping.get(fragment) {
            *value = format!("#{}", new);
        }
    }
}

/// Rewrites `url(#id)` occurrences against the mapping, preserving the
/// original quoting.
fn rewrite_func_iri(value: &str, mapping: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("url(") {
        let after = &rest[start + 4..];
        let end = match after.find(')') {
            Some(end) => end,
            None => break,
        };

        out.push_str(&rest[..start + 4]);

        let inner = &after[..end];
        let trimmed = inner.trim_matches(|c| c == '\'' || c == '"' || c == ' ');
        if let Some(fragment) = trimmed.strip_prefix('#') {
            if let Some(new) = mapping.get(fragment) {
                out.push_str(&inner.replace(trimmed, &format!("#{}", new)));
            } else {
                out.push_str(inner);
            }
        } else {
            out.push_str(inner);
        }

        out.push(')');
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Rewrites and minifies the text of a `<style>` element.
fn rewrite_stylesheet(
    text: &str,
    mapping: &HashMap<String, String>,
    ordered: &[(&str, &str)],
) -> Result<String, Error> {
    let rewritten = rewrite_rules(text, mapping, ordered)?;
    Ok(minify(&rewritten))
}

/// Walks rules and nested group rules, rewriting selector preludes and
/// `url()` values in declaration bodies.
fn rewrite_rules(
    text: &str,
    mapping: &HashMap<String, String>,
    ordered: &[(&str, &str)],
) -> Result<String, Error> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = find_brace(rest) {
        let prelude = &rest[..open];
        let close = match matching_brace(rest, open) {
            Some(close) => close,
            None => break,
        };
        let body = &rest[open + 1..close];

        // Statements such as '@import ...;' preceding a rule stay verbatim.
        let (statements, prelude) = match last_statement_end(prelude) {
            Some(pos) => prelude.split_at(pos + 1),
            None => ("", prelude),
        };
        out.push_str(statements);

        if prelude.trim_start().starts_with('@') {
            // Group rule preludes carry no id selectors. The nested rules
            // still do.
            out.push_str(prelude);
            out.push('{');
            if find_brace(body).is_some() {
                out.push_str(&rewrite_rules(body, mapping, ordered)?);
            } else {
                out.push_str(&rewrite_func_iri(body, mapping));
            }
        } else {
            out.push_str(&rewrite_selectors(prelude, ordered)?);
            out.push('{');
            out.push_str(&rewrite_func_iri(body, mapping));
        }
        out.push('}');

        rest = &rest[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Calls `f` with each byte of `text` that sits outside comments and
/// string literals. Scanning stops once `f` returns `false`.
fn scan_css<F: FnMut(usize, u8) -> bool>(text: &str, mut f: F) {
    let bytes = text.as_bytes();
    let mut quote = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if quote != 0 {
            if b == quote {
                quote = 0;
            }
        } else if b == b'\'' || b == b'"' {
            quote = b;
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
            i += 2;
            while i < bytes.len() && !(bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/')) {
                i += 1;
            }
            i += 1;
        } else if !f(i, b) {
            return;
        }

        i += 1;
    }
}

/// Returns the index of the first brace opening a rule block. Braces
/// inside comments and string literals do not count.
fn find_brace(text: &str) -> Option<usize> {
    let mut found = None;
    scan_css(text, |i, b| {
        if b == b'{' {
            found = Some(i);
            return false;
        }
        true
    });

    found
}

/// Returns the index of the brace closing the one at `open`.
fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0;
    let mut found = None;
    scan_css(text, |i, b| {
        if i < open {
            return true;
        }
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    found = Some(i);
                    return false;
                }
            }
            _ => {}
        }
        true
    });

    found
}

/// Returns the index of the last statement-terminating semicolon, skipping
/// the ones inside comments and string literals.
fn last_statement_end(text: &str) -> Option<usize> {
    let mut found = None;
    scan_css(text, |i, b| {
        if b == b';' {
            found = Some(i);
        }
        true
    });

    found
}

/// Rewrites id selectors inside a rule prelude.
///
/// The prelude is tokenized to find which mapped ids actually appear as id
/// selectors. Substitution then happens on the original text, so every
/// other token survives byte for byte. Malformed selector text is an
/// error, not a silent pass-through.
fn rewrite_selectors(prelude: &str, ordered: &[(&str, &str)]) -> Result<String, Error> {
    if prelude.trim().is_empty() {
        return Ok(prelude.to_string());
    }

    let mut found = Vec::new();
    {
        let terminated = format!("{}{{}}", prelude);
        let mut tokenizer = Tokenizer::new_bound(&terminated, 0, terminated.len());
        loop {
            match tokenizer.parse_next()? {
                Token::EndOfStream | Token::BlockStart => break,
                Token::IdSelector(name) => found.push(name.to_string()),
                _ => {}
            }
        }
    }

    let mut out = prelude.to_string();
    for &(old, new) in ordered {
        if found.iter().any(|f| f == old) {
            out = replace_id_selector(&out, old, new);
        }
    }

    Ok(out)
}

/// Replaces `#old` with `#new` at identifier boundaries.
fn replace_id_selector(text: &str, old: &str, new: &str) -> String {
    let needle = format!("#{}", old);
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(&needle) {
        let after = &rest[pos + needle.len()..];
        let boundary = match after.chars().next() {
            Some(c) => !is_ident_char(c),
            None => true,
        };

        out.push_str(&rest[..pos]);
        if boundary {
            out.push('#');
            out.push_str(new);
        } else {
            out.push_str(&needle);
        }
        rest = after;
    }

    out.push_str(rest);
    out
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Strips comments, collapses whitespace and drops the blanks around
/// structural characters. Keeps string literals intact.
fn minify(text: &str) -> String {
    const STRUCTURAL: &[char] = &['{', '}', ';', ':', ',', '>', '(', ')'];

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut quote = None;
    let mut pending_space = false;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' => {
                if pending_space && needs_space(&out, c) {
                    out.push(' ');
                }
                pending_space = false;
                quote = Some(c);
                out.push(c);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ if c.is_whitespace() => {
                pending_space = true;
            }
            _ => {
                if pending_space && !STRUCTURAL.contains(&c) && needs_space(&out, c) {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            }
        }
    }

    out
}

fn needs_space(out: &str, _next: char) -> bool {
    match out.chars().last() {
        Some(last) => !matches!(last, '{' | '}' | ';' | ':' | ',' | '>' | '('),
        None => false,
    }
}
