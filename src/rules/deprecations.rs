//! Deprecated template and stylesheet constructs from the legacy platform
//! generation. All of these break rendering on current versions, so the
//! group applies to every target version; the severity is always `error`.

use crate::template::ParsedTemplate;

use super::{ALL_VERSIONS, CURRENT_ONLY, Check, Rule, Severity};

const fn depr(code: &'static str, description: &'static str, pattern: &'static str) -> Rule {
    Rule {
        code,
        description,
        severity: Severity::Error,
        versions: ALL_VERSIONS,
        check: Check::TemplateSource(pattern),
    }
}

const fn depr_css(code: &'static str, description: &'static str, pattern: &'static str) -> Rule {
    Rule {
        code,
        description,
        severity: Severity::Error,
        versions: ALL_VERSIONS,
        check: Check::StylesheetSource(pattern),
    }
}

const fn depr_ast(
    code: &'static str,
    description: &'static str,
    predicate: fn(&ParsedTemplate) -> bool,
) -> Rule {
    Rule {
        code,
        description,
        severity: Severity::Error,
        versions: ALL_VERSIONS,
        check: Check::TemplateAst(predicate),
    }
}

fn content_zero_hash(template: &ParsedTemplate) -> bool {
    template.has_helper(|h| {
        h.name == "content"
            && (h.hash_value("words") == Some("0") || h.hash_value("word") == Some("0"))
    })
}

fn get_includes_author(template: &ParsedTemplate) -> bool {
    template.has_helper(|h| {
        h.block
            && h.name == "get"
            && h.hash_value("include")
                .is_some_and(|v| v.split(',').any(|part| part.trim() == "author"))
    })
}

fn author_block(template: &ParsedTemplate) -> bool {
    template.has_helper(|h| h.block && h.name == "author")
}

fn foreach_author(template: &ParsedTemplate) -> bool {
    template.has_helper(|h| h.block && h.name == "foreach" && h.first_param() == Some("author"))
}

fn each_block(template: &ParsedTemplate) -> bool {
    template.has_helper(|h| h.block && h.name == "each")
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        depr(
            "GS001-DEPR-PURL",
            "Replace {{pageUrl}} with {{page_url}}",
            r"\{\{\s*pageUrl\b",
        ),
        depr(
            "GS001-DEPR-MD",
            "Replace {{meta_description}} in your <meta name=\"description\" /> tag",
            r#"<meta\s+name=["']description["']\s+content=["']\{\{\s*meta_description\s*\}\}["']"#,
        ),
        depr(
            "GS001-DEPR-IMG",
            "Replace {{image}} with {{feature_image}}",
            r"\{\{\s*image\b",
        ),
        depr(
            "GS001-DEPR-COV",
            "Replace {{cover}} with {{cover_image}}",
            r"\{\{\s*cover\b",
        ),
        depr(
            "GS001-DEPR-AIMG",
            "Replace {{author.image}} with {{author.profile_image}}",
            r"\{\{\s*author\.image\b",
        ),
        depr(
            "GS001-DEPR-PIMG",
            "Replace {{post.image}} with {{post.feature_image}}",
            r"\{\{\s*post\.image\b",
        ),
        depr(
            "GS001-DEPR-PAIMG",
            "Replace {{post.author.image}} with {{post.author.profile_image}}",
            r"\{\{\s*post\.author\.image\b",
        ),
        depr(
            "GS001-DEPR-PAC",
            "Replace {{post.author.cover}} with {{post.author.cover_image}}",
            r"\{\{\s*post\.author\.cover\b",
        ),
        depr(
            "GS001-DEPR-PTIMG",
            "Replace {{posts.tags.[#].image}} with {{posts.tags.[#].feature_image}}",
            r"\{\{\s*posts\.tags\.\[[0-9]+\]\.image\b",
        ),
        depr(
            "GS001-DEPR-TSIMG",
            "Replace {{tags.[#].image}} with {{tags.[#].feature_image}}",
            r"\{\{\s*tags\.\[[0-9]+\]\.image\b",
        ),
        depr(
            "GS001-DEPR-PPP",
            "Replace {{@blog.posts_per_page}} with {{@config.posts_per_page}}",
            r"\{\{\s*@blog\.posts_per_page\b",
        ),
        depr_ast(
            "GS001-DEPR-C0H",
            "Replace {{content words=\"0\"}} with the {{img_url}} helper",
            content_zero_hash,
        ),
        depr(
            "GS001-DEPR-BC",
            "Replace {{@blog.cover}} with {{@blog.cover_image}}",
            r"\{\{\s*@blog\.cover\b",
        ),
        depr(
            "GS001-DEPR-CON-BC",
            "Replace {{#if @blog.cover}} with {{#if @blog.cover_image}}",
            r"\{\{\s*#if\s+@blog\.cover\s*\}\}",
        ),
        depr(
            "GS001-DEPR-AC",
            "Replace {{author.cover}} with {{author.cover_image}}",
            r"\{\{\s*author\.cover\b",
        ),
        depr(
            "GS001-DEPR-CON-AC",
            "Replace {{#if author.cover}} with {{#if author.cover_image}}",
            r"\{\{\s*#if\s+author\.cover\s*\}\}",
        ),
        depr(
            "GS001-DEPR-CON-AIMG",
            "Replace {{#if author.image}} with {{#if author.profile_image}}",
            r"\{\{\s*#if\s+author\.image\s*\}\}",
        ),
        depr(
            "GS001-DEPR-CON-PTIMG",
            "Replace {{#if posts.tags.[#].image}} with {{#if posts.tags.[#].feature_image}}",
            r"\{\{\s*#if\s+posts\.tags\.\[[0-9]+\]\.image\s*\}\}",
        ),
        depr(
            "GS001-DEPR-CON-TSIMG",
            "Replace {{#if tags.[#].image}} with {{#if tags.[#].feature_image}}",
            r"\{\{\s*#if\s+tags\.\[[0-9]+\]\.image\s*\}\}",
        ),
        depr(
            "GS001-DEPR-CON-IMG",
            "Replace {{#if image}} with {{#if feature_image}}",
            r"\{\{\s*#if\s+image\s*\}\}",
        ),
        depr(
            "GS001-DEPR-CON-COV",
            "Replace {{#if cover}} with {{#if cover_image}}",
            r"\{\{\s*#if\s+cover\s*\}\}",
        ),
        depr(
            "GS001-DEPR-CON-TIMG",
            "Replace {{#if tag.image}} with {{#if tag.feature_image}}",
            r"\{\{\s*#if\s+tag\.image\s*\}\}",
        ),
        depr(
            "GS001-DEPR-TIMG",
            "Replace {{tag.image}} with {{tag.feature_image}}",
            r"\{\{\s*tag\.image\b",
        ),
        depr_css(
            "GS001-DEPR-CSS-AT",
            "Replace the .archive-template class with .paged",
            r"\.archive-template",
        ),
        depr_css(
            "GS001-DEPR-CSS-PA",
            "Replace the .page class with .page-template",
            r"(?m)\.page([^\w-]|$)",
        ),
        depr_css(
            "GS001-DEPR-CSS-PATS",
            "Replace the .page-template-{slug} class with .{slug}-template",
            r"\.page-template-[\w-]+",
        ),
        depr_ast(
            "GS001-DEPR-GIA",
            "Replace the {{#get}} include=\"author\" parameter with include=\"authors\"",
            get_includes_author,
        ),
        depr_ast(
            "GS001-DEPR-AUTH",
            "Replace the {{#author}} block with {{#primary_author}}",
            author_block,
        ),
        depr(
            "GS001-DEPR-AUTH-ID",
            "Replace {{author.id}} with {{primary_author.id}}",
            r"\{\{\s*author\.id\b",
        ),
        depr(
            "GS001-DEPR-AUTH-NAME",
            "Replace {{author.name}} with {{primary_author.name}}",
            r"\{\{\s*author\.name\b",
        ),
        depr(
            "GS001-DEPR-AUTH-BIO",
            "Replace {{author.bio}} with {{primary_author.bio}}",
            r"\{\{\s*author\.bio\b",
        ),
        depr(
            "GS001-DEPR-AUTH-LOC",
            "Replace {{author.location}} with {{primary_author.location}}",
            r"\{\{\s*author\.location\b",
        ),
        depr(
            "GS001-DEPR-AUTH-WEB",
            "Replace {{author.website}} with {{primary_author.website}}",
            r"\{\{\s*author\.website\b",
        ),
        depr(
            "GS001-DEPR-AUTH-TW",
            "Replace {{author.twitter}} with {{primary_author.twitter}}",
            r"\{\{\s*author\.twitter\b",
        ),
        depr(
            "GS001-DEPR-AUTH-FB",
            "Replace {{author.facebook}} with {{primary_author.facebook}}",
            r"\{\{\s*author\.facebook\b",
        ),
        depr(
            "GS001-DEPR-AUTH-PROIM",
            "Replace {{author.profile_image}} with {{primary_author.profile_image}}",
            r"\{\{\s*author\.profile_image\b",
        ),
        depr(
            "GS001-DEPR-AUTH-COIM",
            "Replace {{author.cover_image}} with {{primary_author.cover_image}}",
            r"\{\{\s*author\.cover_image\b",
        ),
        depr(
            "GS001-DEPR-AUTH-URL",
            "Replace {{author.url}} with {{primary_author.url}}",
            r"\{\{\s*author\.url\b",
        ),
        depr(
            "GS001-DEPR-AUTH-FIL",
            "Replace the filter=\"author:…\" parameter with filter=\"authors:…\"",
            r#"filter=["'][^"']*author:"#,
        ),
        depr_ast(
            "GS001-DEPR-AUTH-FORE",
            "Replace {{#foreach author}} with {{#foreach authors}}",
            foreach_author,
        ),
        Rule {
            code: "GS001-DEPR-EACH",
            description: "Replace {{#each}} with {{#foreach}}",
            severity: Severity::Warning,
            versions: CURRENT_ONLY,
            check: Check::TemplateAst(each_block),
        },
    ]
}

#[cfg(test)]
#[path = "deprecations_tests.rs"]
mod tests;
