use handlebars::template::{HelperTemplate, Parameter, Template, TemplateElement};

/// A template source that failed to compile.
///
/// Carried on the owning file record so the relevant rule can surface it;
/// never aborts a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub message: String,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Immutable view of a compiled template.
///
/// Helper invocations are flattened out of the tree (blocks, inverse
/// sections and subexpressions included) so rule predicates stay plain
/// closures over `HelperCall` values instead of visitor hierarchies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedTemplate {
    calls: Vec<HelperCall>,
}

/// One helper invocation found while walking a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperCall {
    /// Helper or path-expression name as written (`author.image`, `foreach`).
    pub name: String,
    /// Positional parameters, rendered back to source text.
    pub params: Vec<String>,
    /// Hash arguments, sorted by key for deterministic iteration.
    pub hash: Vec<(String, String)>,
    /// True for `{{#helper}}` block form.
    pub block: bool,
}

impl HelperCall {
    #[must_use]
    pub fn hash_value(&self, key: &str) -> Option<&str> {
        self.hash
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn first_param(&self) -> Option<&str> {
        self.params.first().map(String::as_str)
    }
}

impl ParsedTemplate {
    /// Every helper invocation in the template, in source order.
    #[must_use]
    pub fn helpers(&self) -> &[HelperCall] {
        &self.calls
    }

    /// True if any invocation satisfies the predicate.
    pub fn has_helper<F>(&self, pred: F) -> bool
    where
        F: Fn(&HelperCall) -> bool,
    {
        self.calls.iter().any(pred)
    }
}

/// Compile template source into a [`ParsedTemplate`].
///
/// # Errors
/// Returns a [`ParseFailure`] describing the syntax error; callers record it
/// as a file-level diagnostic rather than propagating it.
pub fn parse(source: &str) -> std::result::Result<ParsedTemplate, ParseFailure> {
    let template = Template::compile(source).map_err(|e| ParseFailure {
        message: e.to_string(),
    })?;

    let mut calls = Vec::new();
    collect_template(&template, &mut calls);
    Ok(ParsedTemplate { calls })
}

fn collect_template(template: &Template, out: &mut Vec<HelperCall>) {
    for element in &template.elements {
        collect_element(element, out);
    }
}

fn collect_element(element: &TemplateElement, out: &mut Vec<HelperCall>) {
    match element {
        TemplateElement::Expression(ht)
        | TemplateElement::HtmlExpression(ht)
        | TemplateElement::HelperBlock(ht) => collect_helper(ht, out),
        TemplateElement::DecoratorExpression(dt)
        | TemplateElement::DecoratorBlock(dt)
        | TemplateElement::PartialExpression(dt)
        | TemplateElement::PartialBlock(dt) => {
            if let Some(inner) = &dt.template {
                collect_template(inner, out);
            }
        }
        _ => {}
    }
}

fn collect_helper(ht: &HelperTemplate, out: &mut Vec<HelperCall>) {
    let name = parameter_text(&ht.name).unwrap_or_default();
    let params = ht.params.iter().filter_map(parameter_text).collect();

    let mut hash: Vec<(String, String)> = ht
        .hash
        .iter()
        .map(|(k, v)| (k.clone(), parameter_text(v).unwrap_or_default()))
        .collect();
    hash.sort();

    out.push(HelperCall {
        name,
        params,
        hash,
        block: ht.block,
    });

    // Subexpressions are invocations in their own right.
    for param in ht.params.iter().chain(ht.hash.values()) {
        if let Parameter::Subexpression(sub) = param {
            collect_element(sub.as_element(), out);
        }
    }

    if let Some(inner) = &ht.template {
        collect_template(inner, out);
    }
    if let Some(inverse) = &ht.inverse {
        collect_template(inverse, out);
    }
}

fn parameter_text(parameter: &Parameter) -> Option<String> {
    match parameter {
        Parameter::Name(name) => Some(name.clone()),
        p @ Parameter::Path(_) => p.as_name().map(ToString::to_string),
        Parameter::Literal(value) => Some(
            value
                .as_str()
                .map_or_else(|| value.to_string(), ToString::to_string),
        ),
        Parameter::Subexpression(_) => None,
        _ => None,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
