//! Minimal HTML shells around localized content and metadata.

use std::fmt::Write;

use crate::config::Config;
use crate::i18n::{Locale, MessageBundle, PageMessages};
use crate::pages::SitePage;
use crate::seo::{escape_markup, MetadataRecord};

pub struct PageContext<'a> {
    pub config: &'a Config,
    pub locale: Locale,
    pub page: SitePage,
    pub bundle: &'a MessageBundle,
    pub messages: &'a PageMessages,
    pub metadata: &'a MetadataRecord,
    pub structured_data: &'a serde_json::Value,
}

pub fn page_html(ctx: &PageContext<'_>) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"{}\">", ctx.locale);
    html.push_str("<head>\n<meta charset=\"utf-8\" />\n");
    write_head(&mut html, ctx);
    html.push_str("</head>\n<body>\n");
    write_nav(&mut html, ctx);

    let _ = writeln!(
        html,
        "<main>\n<h1>{}</h1>\n<p>{}</p>\n</main>",
        escape_markup(&ctx.messages.heading),
        escape_markup(&ctx.messages.body)
    );

    if ctx.page == SitePage::Contact {
        let _ = writeln!(
            html,
            "<address><a href=\"mailto:{email}\">{email}</a> <a href=\"tel:{phone}\">{phone}</a></address>",
            email = escape_markup(&ctx.config.contact.email),
            phone = escape_markup(&ctx.config.contact.phone)
        );
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn write_head(html: &mut String, ctx: &PageContext<'_>) {
    let meta = ctx.metadata;

    let _ = writeln!(html, "<title>{}</title>", escape_markup(&meta.title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\" />",
        escape_markup(&meta.description)
    );
    if !meta.keywords.is_empty() {
        let _ = writeln!(
            html,
            "<meta name=\"keywords\" content=\"{}\" />",
            escape_markup(&meta.keywords.join(", "))
        );
    }
    let _ = writeln!(
        html,
        "<meta name=\"robots\" content=\"{}, {}\" />",
        if meta.robots.index { "index" } else { "noindex" },
        if meta.robots.follow { "follow" } else { "nofollow" }
    );
    let _ = writeln!(
        html,
        "<link rel=\"canonical\" href=\"{}\" />",
        escape_markup(&meta.alternates.canonical)
    );
    for (code, href) in &meta.alternates.languages {
        let _ = writeln!(
            html,
            "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />",
            escape_markup(code),
            escape_markup(href)
        );
    }

    let og = &meta.open_graph;
    write_property(html, "og:title", &og.title);
    write_property(html, "og:description", &og.description);
    write_property(html, "og:url", &og.url);
    write_property(html, "og:site_name", &og.site_name);
    write_property(html, "og:locale", &og.locale);
    for alternate in &og.alternate_locale {
        write_property(html, "og:locale:alternate", alternate);
    }
    write_property(html, "og:type", &og.kind);
    for image in &og.images {
        write_property(html, "og:image", &image.url);
        write_property(html, "og:image:width", &image.width.to_string());
        write_property(html, "og:image:height", &image.height.to_string());
        write_property(html, "og:image:alt", &image.alt);
    }

    let twitter = &meta.twitter;
    write_name(html, "twitter:card", &twitter.card);
    write_name(html, "twitter:title", &twitter.title);
    write_name(html, "twitter:description", &twitter.description);
    for image in &twitter.images {
        write_name(html, "twitter:image", image);
    }

    // "</" must not appear inside a script element
    let json_ld = ctx.structured_data.to_string().replace("</", "<\\/");
    let _ = writeln!(
        html,
        "<script type=\"application/ld+json\">{}</script>",
        json_ld
    );
}

fn write_nav(html: &mut String, ctx: &PageContext<'_>) {
    html.push_str("<nav>\n<ul>\n");
    for item in &ctx.config.navigation {
        let label = ctx.bundle.nav_label(item.label_key).unwrap_or(item.label_key);
        let current = if item.page == ctx.page {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<li><a href=\"{}\"{}>{}</a></li>",
            item.page.localized_path(ctx.locale.code()),
            current,
            escape_markup(label)
        );
    }
    html.push_str("</ul>\n</nav>\n");
}

fn write_property(html: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        html,
        "<meta property=\"{}\" content=\"{}\" />",
        property,
        escape_markup(content)
    );
}

fn write_name(html: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        html,
        "<meta name=\"{}\" content=\"{}\" />",
        name,
        escape_markup(content)
    );
}
