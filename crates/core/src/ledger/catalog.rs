//! Default regulation catalog.
//!
//! The 2025/26 team regulation, used by the hosting layer to seed the rule
//! store on first run. Titles and descriptions are the team's own wording.

use super::types::NewRule;

const DEFAULT_RULES: &[(&str, &str, u64)] = &[
    // 1. Ritardi
    (
        "1A. Ritardo con avviso (\u{2265}30 min prima)",
        "Nessuna crocetta se segnalato almeno 30 min prima.",
        0,
    ),
    (
        "1B. Ritardo non avvisato",
        "1 crocetta per i primi 5 min; poi 1/min fino a max 20.",
        0,
    ),
    (
        "1C. Ritardo ritrovo/partita",
        "2 crocette per i primi 5 min; poi 2/min fino a max 40.",
        0,
    ),
    (
        "Nota ritardi",
        "Si applica ad allenamenti, video, partite o eventi di squadra; esclusa solo la sala pesi.",
        0,
    ),
    // 1-bis. Assenze
    (
        "Assenza allenamento (ingiustificata)",
        "Vacanza, matrimonio, cena non di lavoro ecc.",
        10,
    ),
    (
        "Assenza allenamento (lavoro)",
        "Per cena di lavoro vedere regola dedicata.",
        0,
    ),
    ("Cena di lavoro", "Assenza per cena di lavoro.", 1),
    ("Assenza allenamento (malattia)", "Giustificata per malattia.", 0),
    (
        "Assenza partita",
        "Per malattia 0 crocette (vedi regola dedicata).",
        20,
    ),
    ("Assenza partita (malattia)", "", 0),
    // 2. Abbigliamento
    (
        "Dimenticanza capo richiesto",
        "1 crocetta per ogni articolo dimenticato (maglia/pantaloncini ecc.).",
        1,
    ),
    (
        "Omert\u{e0} noleggio capo \u{2014} dimenticante",
        "+2 oltre alla dimenticanza.",
        2,
    ),
    (
        "Omert\u{e0} noleggio capo \u{2014} prestatore",
        "+2 per il prestatore.",
        2,
    ),
    (
        "Oggetto personale smarrito",
        "Oggetto perso in palestra/spogliatoio/ritrovo.",
        1,
    ),
    // 3. Paste
    (
        "Dolce extra nel turno di altri (credito)",
        "Usare 'credit' in inserimento movimento.",
        10,
    ),
    // 4. Cartellini
    ("Cartellino giallo", "NON si raddoppia nel giorno partita.", 2),
    (
        "Cartellino rosso",
        "Gi\u{e0} considerato doppio per partita: NON applicare ulteriore raddoppio.",
        10,
    ),
    // 5. Sotto rete
    ("Sottorete (allenamento)", "", 10),
    ("Sottorete (partita)", "", 20),
    // 6. Occasioni speciali
    (
        "Occasioni speciali",
        "Laurea, proprio matrimonio, patente, nascita figli, auto/casa nuova ecc.",
        10,
    ),
    // 7. Scarpe
    ("Dimenticanza scarpe (allenamento)", "", 3),
    ("Dimenticanza scarpe (partita)", "", 10),
    // 8. Suoneria
    ("Suoneria in allenamento", "", 1),
    ("Suoneria durante video", "", 2),
    // 9.
    ("Spreco alcool consistente (\u{2265}5 cl)", "", 1),
    // 10.
    ("Dimenticanza documento identit\u{e0} (partita)", "", 10),
    // 12.
    ("Gesto di stizza", "", 1),
    // 13.
    ("Diffamazioni / Omert\u{e0} / Falsa testimonianza", "", 1),
    // 14-15.
    ("Esordio in Serie B", "", 10),
    ("Nomina di capitano", "", 10),
    ("Altro", "", 1),
];

/// Returns the default regulation catalog as rule inputs, all active.
#[must_use]
pub fn default_rules() -> Vec<NewRule> {
    DEFAULT_RULES
        .iter()
        .map(|&(title, description, crocette)| NewRule {
            title: title.to_string(),
            description: description.to_string(),
            crocette,
            active: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let rules = default_rules();
        assert_eq!(rules.len(), 31);
        assert!(rules.iter().all(|r| !r.title.is_empty()));
        assert!(rules.iter().all(|r| r.active));
    }

    #[test]
    fn test_known_defaults() {
        let rules = default_rules();
        let red_card = rules
            .iter()
            .find(|r| r.title == "Cartellino rosso")
            .unwrap();
        assert_eq!(red_card.crocette, 10);

        let match_absence = rules.iter().find(|r| r.title == "Assenza partita").unwrap();
        assert_eq!(match_absence.crocette, 20);
    }
}
