//! Placeholder articles and categories used until the CMS is connected
//!
//! Category `count` values here are deliberately left at zero; the service
//! recomputes them from the posts.

use crate::models::{BlogCategory, BlogPost};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

pub static MOCK_POSTS: Lazy<Vec<BlogPost>> = Lazy::new(mock_posts);
pub static MOCK_CATEGORIES: Lazy<Vec<BlogCategory>> = Lazy::new(mock_categories);

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("mock dates should be valid")
}

fn tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

fn mock_categories() -> Vec<BlogCategory> {
    [
        (
            1,
            "waermepumpe",
            "Wärmepumpe",
            "Alles rund um Luft-, Sole- und Wasser-Wärmepumpen: Technik, Kosten und Effizienz.",
        ),
        (
            2,
            "solarthermie",
            "Solarthermie",
            "Warmwasser und Heizungsunterstützung mit der Kraft der Sonne.",
        ),
        (
            3,
            "photovoltaik",
            "Photovoltaik",
            "Eigenen Strom erzeugen, speichern und sinnvoll nutzen.",
        ),
        (
            4,
            "foerderung",
            "Förderung",
            "BEG, KfW und BAFA: So sichern Sie sich staatliche Zuschüsse.",
        ),
        (
            5,
            "heizungstechnik",
            "Heizungstechnik",
            "Modernisierung, Wartung und hydraulischer Abgleich bestehender Anlagen.",
        ),
    ]
    .into_iter()
    .map(|(id, slug, name, description)| BlogCategory {
        id,
        slug: slug.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        count: 0,
    })
    .collect()
}

fn mock_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            slug: "waermepumpe-kosten-foerderung-2024".to_string(),
            title: "Was kostet eine Wärmepumpe 2024? Preise, Förderung und Betriebskosten"
                .to_string(),
            excerpt: "Anschaffung, Installation und laufende Kosten einer Wärmepumpe im Überblick, inklusive der aktuellen BEG-Förderung.".to_string(),
            content: r#"
<p>Die Wärmepumpe ist das Herzstück der Wärmewende. Doch mit welchen Kosten müssen Hausbesitzer rechnen, und wie viel übernimmt der Staat?</p>
<h2>Anschaffungskosten im Überblick</h2>
<p>Die Preise hängen stark von der Wärmequelle ab. Als grobe Orientierung für ein Einfamilienhaus gelten:</p>
<ul>
<li>Luft-Wasser-Wärmepumpe: 12.000 bis 20.000 Euro</li>
<li>Sole-Wasser-Wärmepumpe inklusive Erdbohrung: 20.000 bis 35.000 Euro</li>
<li>Wasser-Wasser-Wärmepumpe inklusive Brunnen: 22.000 bis 38.000 Euro</li>
</ul>
<p><strong>Wichtig:</strong> Der Förderantrag muss <em>vor</em> der Auftragsvergabe gestellt werden. Ein bereits unterschriebener Vertrag schließt die Förderung aus.</p>
<h2>So hoch ist die BEG-Förderung</h2>
<p>Über die Bundesförderung für effiziente Gebäude (BEG) erhalten Sie bis zu 70 Prozent Zuschuss. Die Grundförderung beträgt 30 Prozent, dazu kommen Klimageschwindigkeits- und Einkommensbonus.</p>
<ol>
<li>Grundförderung: 30 Prozent</li>
<li>Klimageschwindigkeitsbonus: 20 Prozent</li>
<li>Einkommensbonus: 30 Prozent</li>
</ol>
<p><strong>Tipp:</strong> Ein Effizienzbonus von 5 Prozent ist möglich, wenn die Wärmepumpe ein natürliches Kältemittel nutzt.</p>
<h2>Laufende Betriebskosten</h2>
<p>Entscheidend ist die Jahresarbeitszahl (JAZ). Eine JAZ von 3,5 bedeutet, dass aus einer Kilowattstunde Strom 3,5 Kilowattstunden Wärme werden.</p>
<p><strong>Fazit:</strong> Mit Förderung und gutem Wärmepumpentarif ist die Wärmepumpe langfristig eine der günstigsten Heizungen.</p>
"#
            .to_string(),
            category: "Wärmepumpe".to_string(),
            author: "Sabine Keller".to_string(),
            author_bio: Some(
                "Energieberaterin (dena) mit Schwerpunkt auf Heizungsmodernisierung.".to_string(),
            ),
            date: date(2024, 3, 12),
            reading_time: 7,
            image: Some("/images/blog/waermepumpe-kosten.jpg".to_string()),
            tags: tags(&["Wärmepumpe", "Kosten", "Förderung", "BEG"]),
            featured: Some(true),
        },
        BlogPost {
            id: 2,
            slug: "solarthermie-warmwasser-heizungsunterstuetzung".to_string(),
            title: "Solarthermie: Warmwasser und Heizungsunterstützung vom Dach".to_string(),
            excerpt: "Wie Solarthermie funktioniert, welche Deckungsrate realistisch ist und wann sich die Anlage rechnet.".to_string(),
            content: r#"
<p>Eine Solarthermieanlage wandelt Sonnenlicht direkt in Wärme um. Sie eignet sich für Warmwasser und zur Unterstützung der Heizung.</p>
<h2>Wie hoch ist die solare Deckungsrate?</h2>
<p>Die solare Deckungsrate gibt an, welcher Anteil des Wärmebedarfs durch die Sonne gedeckt wird. Für reine Warmwasseranlagen sind 50 bis 60 Prozent üblich.</p>
<p><strong>Hinweis:</strong> Bei Heizungsunterstützung sinkt die Deckungsrate auf 20 bis 30 Prozent, da im Winter wenig Sonne zur Verfügung steht.</p>
<h2>Flachkollektor oder Röhrenkollektor?</h2>
<ul>
<li>Flachkollektoren sind günstiger und robust.</li>
<li>Vakuumröhrenkollektoren erzielen auch bei Kälte hohe Erträge.</li>
</ul>
<p><strong>Zusammenfassung:</strong> Solarthermie senkt die Heizkosten spürbar und lässt sich gut mit einer Wärmepumpe kombinieren.</p>
"#
            .to_string(),
            category: "Solarthermie".to_string(),
            author: "Markus Brandt".to_string(),
            author_bio: None,
            date: date(2024, 2, 20),
            reading_time: 5,
            image: Some("/images/blog/solarthermie.jpg".to_string()),
            tags: tags(&["Solarthermie", "Warmwasser", "Wärmepumpe"]),
            featured: None,
        },
        BlogPost {
            id: 3,
            slug: "beg-foerderantrag-schritt-fuer-schritt".to_string(),
            title: "BEG-Förderantrag Schritt für Schritt erklärt".to_string(),
            excerpt: "Von der Registrierung bei der KfW bis zur Auszahlung: So stellen Sie den Förderantrag für Ihre neue Heizung richtig.".to_string(),
            content: r#"
<p>Seit 2024 läuft die Heizungsförderung über die KfW. Wir zeigen, wie der Antrag gelingt.</p>
<h2>Vor dem Antrag</h2>
<p>Sie benötigen einen Liefer- oder Leistungsvertrag mit auflösender Bedingung sowie die Bestätigung zum Antrag (BzA) Ihres Fachbetriebs.</p>
<p><strong>Achtung:</strong> Ohne auflösende oder aufschiebende Bedingung im Vertrag wird der Antrag abgelehnt.</p>
<h2>Antrag im Kundenportal</h2>
<ol>
<li>Registrierung im KfW-Kundenportal „Meine KfW"</li>
<li>Eingabe der BzA-ID</li>
<li>Upload des Vertrags</li>
</ol>
<h2>Nach der Installation</h2>
<p>Nach Abschluss der Arbeiten reichen Sie die Bestätigung nach Durchführung (BnD) und die Rechnung ein. Danach wird der Zuschuss ausgezahlt.</p>
<p><strong>Tipp:</strong> Bewahren Sie alle Rechnungen zehn Jahre auf, die KfW kann Stichproben anfordern.</p>
"#
            .to_string(),
            category: "Förderung".to_string(),
            author: "Sabine Keller".to_string(),
            author_bio: Some(
                "Energieberaterin (dena) mit Schwerpunkt auf Heizungsmodernisierung.".to_string(),
            ),
            date: date(2024, 4, 2),
            reading_time: 6,
            image: None,
            tags: tags(&["Förderung", "BEG", "KfW"]),
            featured: Some(true),
        },
        BlogPost {
            id: 4,
            slug: "luft-wasser-waermepumpe-im-altbau".to_string(),
            title: "Luft-Wasser-Wärmepumpe im Altbau: Geht das?".to_string(),
            excerpt: "Viele Altbauten sind besser für die Wärmepumpe geeignet als gedacht. Worauf es bei Vorlauftemperatur und Heizkörpern ankommt.".to_string(),
            content: r#"
<p>Der Mythos hält sich hartnäckig: Wärmepumpen funktionieren nur im Neubau. Feldtests zeigen etwas anderes.</p>
<h2>Die Vorlauftemperatur entscheidet</h2>
<p>Liegt die benötigte Vorlauftemperatur unter 55 Grad, arbeitet eine moderne Luft-Wasser-Wärmepumpe auch im Altbau effizient.</p>
<p><strong>Tipp:</strong> Drehen Sie im Winter testweise die Vorlauftemperatur Ihres Kessels auf 50 Grad herunter. Bleibt es warm, ist Ihr Haus bereit.</p>
<h2>Kosten im Altbau</h2>
<p>Oft genügt der Tausch einzelner Heizkörper. Eine Komplettsanierung ist selten nötig, die Kosten bleiben überschaubar.</p>
<p><strong>Fazit:</strong> Auch im Altbau ist die Wärmepumpe meist die beste Wahl.</p>
"#
            .to_string(),
            category: "Wärmepumpe".to_string(),
            author: "Markus Brandt".to_string(),
            author_bio: None,
            date: date(2024, 1, 15),
            reading_time: 4,
            image: Some("/images/blog/altbau-waermepumpe.jpg".to_string()),
            tags: tags(&["Wärmepumpe", "Altbau", "Kosten"]),
            featured: None,
        },
        BlogPost {
            id: 5,
            slug: "photovoltaik-und-waermepumpe-kombinieren".to_string(),
            title: "Photovoltaik und Wärmepumpe clever kombinieren".to_string(),
            excerpt: "Mit eigenem Solarstrom die Wärmepumpe betreiben: So steigern Sie Eigenverbrauch und senken die Stromkosten.".to_string(),
            content: r#"
<p>Eine Photovoltaikanlage liefert tagsüber günstigen Strom, den die Wärmepumpe direkt nutzen kann.</p>
<h2>Eigenverbrauch erhöhen</h2>
<p>Mit einem Energiemanager startet die Wärmepumpe bevorzugt bei Sonnenschein und lädt den Warmwasserspeicher.</p>
<ul>
<li>Warmwasser mittags bereiten</li>
<li>Pufferspeicher als thermische Batterie nutzen</li>
</ul>
<h2>Lohnt sich ein Batteriespeicher?</h2>
<p><strong>Hinweis:</strong> Ein Batteriespeicher rechnet sich vor allem bei hohem Abendverbrauch. Für die Wärmepumpe allein ist er selten nötig.</p>
"#
            .to_string(),
            category: "Photovoltaik".to_string(),
            author: "Jana Hoffmann".to_string(),
            author_bio: Some("Elektroingenieurin und Solarteurin.".to_string()),
            date: date(2024, 5, 6),
            reading_time: 5,
            image: Some("/images/blog/pv-waermepumpe.jpg".to_string()),
            tags: tags(&["Photovoltaik", "Wärmepumpe", "Eigenverbrauch"]),
            featured: None,
        },
        BlogPost {
            id: 6,
            slug: "hydraulischer-abgleich-heizkosten-sparen".to_string(),
            title: "Hydraulischer Abgleich: Kleiner Eingriff, große Ersparnis".to_string(),
            excerpt: "Warum der hydraulische Abgleich Heizkosten spart und für die Förderung Pflicht ist.".to_string(),
            content: r#"
<p>Rauschende Heizkörper und ungleich warme Räume sind typische Zeichen für einen fehlenden hydraulischen Abgleich.</p>
<h2>Was passiert beim Abgleich?</h2>
<p>Der Fachbetrieb berechnet für jeden Heizkörper den richtigen Volumenstrom und stellt die Thermostatventile entsprechend ein.</p>
<p><strong>Wichtig:</strong> Für die BEG-Förderung einer neuen Heizung ist der hydraulische Abgleich nach Verfahren B vorgeschrieben.</p>
<p><strong>Zusammenfassung:</strong> Der Abgleich kostet wenige hundert Euro und spart bis zu 15 Prozent Heizenergie.</p>
"#
            .to_string(),
            category: "Heizungstechnik".to_string(),
            author: "Jana Hoffmann".to_string(),
            author_bio: Some("Elektroingenieurin und Solarteurin.".to_string()),
            date: date(2023, 11, 28),
            reading_time: 3,
            image: None,
            tags: tags(&["Heizungstechnik", "Kosten", "BEG"]),
            featured: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validate_slug_format;
    use std::collections::HashSet;

    #[test]
    fn test_post_slugs_are_unique_and_valid() {
        let mut seen = HashSet::new();
        for post in MOCK_POSTS.iter() {
            assert!(validate_slug_format(&post.slug).is_ok(), "{}", post.slug);
            assert!(
                seen.insert(post.slug.as_str()),
                "duplicate slug {}",
                post.slug
            );
        }
    }

    #[test]
    fn test_post_ids_are_unique() {
        let ids = MOCK_POSTS
            .iter()
            .map(|post| post.id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), MOCK_POSTS.len());
    }

    #[test]
    fn test_every_post_has_a_known_category() {
        let slugs = MOCK_CATEGORIES
            .iter()
            .map(|category| category.slug.as_str())
            .collect::<HashSet<_>>();

        for post in MOCK_POSTS.iter() {
            assert!(
                slugs.contains(post.category_slug().as_str()),
                "post {} has unknown category {}",
                post.id,
                post.category
            );
        }
    }

    #[test]
    fn test_first_post_matches_documented_fixture() {
        let post = &MOCK_POSTS[0];
        assert_eq!(post.id, 1);
        assert_eq!(post.category, "Wärmepumpe");
        for tag in ["Wärmepumpe", "Kosten", "Förderung", "BEG"] {
            assert!(post.tags.iter().any(|t| t == tag));
        }
    }
}
