//! Server-side HTML rendering.
//!
//! Every string from the catalog or the request passes through
//! [`escape_html`] before it reaches the page.

use sca_i18n::contact::{self, ContactCard, CATALOG_PDF, EVENT};
use sca_i18n::seo::escape_html;
use sca_i18n::{Locale, LocaleContext, Location, PageMetadata, TranslationKey};

/// Everything a page needs besides its own content.
#[derive(Debug, Clone)]
pub struct PageView<'c> {
    /// Locale and catalog for the request.
    pub ctx: LocaleContext<'c>,
    /// Head metadata.
    pub meta: PageMetadata,
    /// Requested location; the language switcher links are derived from it.
    pub location: Location,
    /// Year shown in the footer.
    pub year: i32,
}

impl PageView<'_> {
    fn t(&self, key: TranslationKey) -> String {
        escape_html(&self.ctx.t(key))
    }

    fn href(&self, path: &str) -> String {
        escape_html(&self.ctx.localized_path(path))
    }
}

/// Landing page.
pub fn home_page(view: &PageView<'_>) -> String {
    let features: String = [
        TranslationKey::Feat1,
        TranslationKey::Feat2,
        TranslationKey::Feat3,
        TranslationKey::Feat4,
        TranslationKey::Feat5,
    ]
    .into_iter()
    .map(|key| format!("<li>{}</li>", view.t(key)))
    .collect();

    let services: String = [
        (TranslationKey::Srv1Title, TranslationKey::Srv1Desc),
        (TranslationKey::Srv2Title, TranslationKey::Srv2Desc),
        (TranslationKey::Srv3Title, TranslationKey::Srv3Desc),
    ]
    .into_iter()
    .map(|(title, desc)| format!("<article><h3>{}</h3><p>{}</p></article>", view.t(title), view.t(desc)))
    .collect();

    let card = ContactCard::company_contact();
    let mailto = contact::mailto_link(
        &card.email,
        &contact::localized_email_subject(&view.ctx),
        &contact::email_body(),
    );
    let event = escape_html(
        &view
            .ctx
            .t_with(TranslationKey::EventTitle, [("event", EVENT.display_name().as_str())]),
    );

    let main = format!(
        r##"<section class="hero">
<h1>{hero_title}</h1>
<p>{hero_subtitle}</p>
<a class="button" href="#contact">{hero_cta}</a>
<a class="button secondary" href="#brands">{hero_brands_btn}</a>
</section>
<aside class="event">
<span class="badge">{event_badge}</span>
<h2>{event}</h2>
<p>{event_description}</p>
<p>{event_location} · {event_dates}</p>
</aside>
<section id="concept">
<h2>{concept_title}</h2>
<p class="subtitle">{concept_subtitle}</p>
<p>{concept_desc}</p>
<ul>{features}</ul>
</section>
<section id="services">
<h2>{services_title}</h2>
{services}
</section>
<section id="brands">
<h2>{brands_title}</h2>
<p>{brands_subtitle}</p>
</section>
<section id="expertise">
<h2>{expertise_title}</h2>
<p class="subtitle">{expertise_subtitle}</p>
<p>{expertise_description}</p>
</section>
<section id="contact">
<h2>{contact_title}</h2>
<div class="office"><h3>{contact_arg_title}</h3><p>{name}, {role_partner}</p><a href="{mailto}">{email}</a></div>
<div class="office"><h3>{contact_de_title}</h3><p>{role_partner_2}</p></div>
</section>
"##,
        hero_title = view.t(TranslationKey::HeroTitle),
        hero_subtitle = view.t(TranslationKey::HeroSubtitle),
        hero_cta = view.t(TranslationKey::HeroCta),
        hero_brands_btn = view.t(TranslationKey::HeroBrandsBtn),
        event_badge = view.t(TranslationKey::EventBadge),
        event = event,
        event_description = view.t(TranslationKey::EventDescription),
        event_location = view.t(TranslationKey::EventLocation),
        event_dates = view.t(TranslationKey::EventDates),
        concept_title = view.t(TranslationKey::ConceptTitle),
        concept_subtitle = view.t(TranslationKey::ConceptSubtitle),
        concept_desc = view.t(TranslationKey::ConceptDesc),
        features = features,
        services_title = view.t(TranslationKey::ServicesTitle),
        services = services,
        brands_title = view.t(TranslationKey::BrandsTitle),
        brands_subtitle = view.t(TranslationKey::BrandsSubtitle),
        expertise_title = view.t(TranslationKey::ExpertiseTitle),
        expertise_subtitle = view.t(TranslationKey::ExpertiseSubtitle),
        expertise_description = view.t(TranslationKey::ExpertiseDescription),
        contact_title = view.t(TranslationKey::ContactTitle),
        contact_arg_title = view.t(TranslationKey::ContactArgTitle),
        contact_de_title = view.t(TranslationKey::ContactDeTitle),
        name = escape_html(&card.name),
        role_partner = view.t(TranslationKey::RolePartner),
        role_partner_2 = view.t(TranslationKey::RolePartner2),
        mailto = escape_html(&mailto),
        email = escape_html(&card.email),
    );

    layout(view, &main)
}

/// Digital business card.
pub fn connect_page(view: &PageView<'_>, card: &ContactCard) -> String {
    let whatsapp = contact::whatsapp_link(&card.phone, &contact::localized_whatsapp_message(&view.ctx));
    let mailto = contact::mailto_link(
        &card.email,
        &contact::localized_email_subject(&view.ctx),
        &contact::email_body(),
    );
    let position = card
        .position
        .as_deref()
        .map(|position| format!("<p class=\"position\">{}</p>", escape_html(position)))
        .unwrap_or_default();

    let main = format!(
        r#"<section class="connect">
<h1>{name}</h1>
{position}<p class="company">{company}</p>
<p class="tagline">{tagline}</p>
<p>{subtitle}</p>
<nav class="actions">
<a class="button" href="{vcard}" download>{save}</a>
<a class="button" href="{whatsapp}">{whatsapp_label}</a>
<a class="button" href="{mailto}">{email_label}</a>
<a class="button" href="{catalog}">{catalog_label}</a>
<a class="button" href="{website}">{website_label}</a>
</nav>
</section>
"#,
        name = escape_html(&card.name),
        position = position,
        company = escape_html(&card.company),
        tagline = view.t(TranslationKey::ConnectTagline),
        subtitle = view.t(TranslationKey::ConnectSubtitle),
        vcard = view.href("/connect/vcard"),
        save = view.t(TranslationKey::ConnectSave),
        whatsapp = escape_html(&whatsapp),
        whatsapp_label = view.t(TranslationKey::ConnectWhatsapp),
        mailto = escape_html(&mailto),
        email_label = view.t(TranslationKey::ConnectEmail),
        catalog = CATALOG_PDF,
        catalog_label = view.t(TranslationKey::ConnectCatalog),
        website = view.href(""),
        website_label = view.t(TranslationKey::ConnectWebsite),
    );

    layout(view, &main)
}

/// Localized 404 page.
pub fn not_found_page(view: &PageView<'_>) -> String {
    let main = format!(
        r#"<section class="not-found">
<h1>{title}</h1>
<p>{desc}</p>
<a class="button" href="{home}">{back}</a>
</section>
"#,
        title = view.t(TranslationKey::NotFoundTitle),
        desc = view.t(TranslationKey::NotFoundDesc),
        home = view.href(""),
        back = view.t(TranslationKey::NotFoundBack),
    );

    layout(view, &main)
}

fn layout(view: &PageView<'_>, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{head}</head>
<body>
<header>
<a class="logo" href="{home}">SCA</a>
{navigation}
{switcher}
</header>
<main>
{main}</main>
{footer}
</body>
</html>
"#,
        lang = view.ctx.locale().short_code(),
        head = view.meta.to_html(),
        home = view.href(""),
        navigation = navigation(view),
        switcher = language_switcher(view),
        main = main,
        footer = footer(view),
    )
}

/// In-page anchors of the home page, prefixed so they also work from
/// other pages.
fn navigation(view: &PageView<'_>) -> String {
    let home = view.ctx.localized_path("");
    let links: String = [
        ("concept", TranslationKey::NavConcept),
        ("services", TranslationKey::NavServices),
        ("contact", TranslationKey::NavContact),
    ]
    .into_iter()
    .map(|(anchor, key)| {
        format!(
            r##"<a href="{}#{}">{}</a>"##,
            escape_html(&home),
            anchor,
            view.t(key)
        )
    })
    .collect();

    format!("<nav class=\"main-nav\">{}</nav>", links)
}

fn language_switcher(view: &PageView<'_>) -> String {
    let current = view.ctx.locale();
    let links: String = Locale::all()
        .into_iter()
        .map(|locale| {
            let target = view.location.with_locale(locale).to_string();
            let active = if locale == current {
                r#" aria-current="true""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}" hreflang="{}" lang="{}"{}>{}</a>"#,
                escape_html(&target),
                locale.short_code(),
                locale.short_code(),
                active,
                escape_html(locale.display_name())
            )
        })
        .collect();

    format!(
        r#"<nav class="language-switcher" aria-label="{}">{}</nav>"#,
        view.t(TranslationKey::LanguageSwitcherLabel),
        links
    )
}

fn footer(view: &PageView<'_>) -> String {
    let links: String = [
        TranslationKey::NavFactory,
        TranslationKey::NavOem,
        TranslationKey::NavQuality,
        TranslationKey::NavBespoke,
    ]
    .into_iter()
    .map(|key| format!("<li>{}</li>", view.t(key)))
    .collect();
    let year = view.year.to_string();
    let notice = view.ctx.t_with(TranslationKey::Footer, [("year", year.as_str())]);

    format!(
        "<footer>\n<ul>{}</ul>\n<p>{}</p>\n</footer>",
        links,
        escape_html(&notice)
    )
}
