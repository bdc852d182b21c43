//! Default conjugation lookup.
//!
//! Maps a verb infinitive to the conjugated forms a guess of that infinitive
//! also reveals. The table is consumed exactly like morphology variants and
//! can be replaced wholesale at load time by a caller-supplied lookup. Forms
//! are stored in key form (lowercase, accent-free); coverage is the handful
//! of verbs that dominate encyclopedic openings (births, deaths, careers),
//! with third-person, participle and simple-past forms.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static CONJUGATIONS: &[(&str, &[&str])] = &[
    (
        "etre",
        &["suis", "es", "est", "sommes", "etes", "sont", "etait", "etaient", "fut", "furent", "sera", "seront", "ete"],
    ),
    (
        "avoir",
        &["ai", "as", "a", "avons", "avez", "ont", "avait", "avaient", "eut", "eurent", "aura", "auront", "eu"],
    ),
    ("faire", &["fais", "fait", "font", "faisait", "faisaient", "fit", "firent", "fera", "feront", "faits", "faite", "faites"]),
    ("dire", &["dit", "disent", "disait", "dirent", "dira", "dite", "dits"]),
    ("aller", &["va", "vont", "allait", "allaient", "alla", "ira", "iront", "alle", "allee", "alles", "allees"]),
    ("voir", &["voit", "voient", "voyait", "vit", "virent", "verra", "vu", "vue", "vus", "vues"]),
    ("venir", &["vient", "viennent", "venait", "vint", "vinrent", "viendra", "venu", "venue", "venus", "venues"]),
    ("devenir", &["devient", "deviennent", "devenait", "devint", "devinrent", "deviendra", "devenu", "devenue", "devenus", "devenues"]),
    ("naitre", &["nait", "naissent", "naissait", "naquit", "naquirent", "naitra", "ne", "nee", "nes", "nees"]),
    ("mourir", &["meurt", "meurent", "mourait", "mourut", "moururent", "mourra", "mort", "morte", "morts", "mortes"]),
    ("prendre", &["prend", "prennent", "prenait", "prit", "prirent", "prendra", "pris", "prise", "prises"]),
    ("donner", &["donne", "donnent", "donnait", "donna", "donnera", "donnee", "donnes", "donnees"]),
    ("trouver", &["trouve", "trouvent", "trouvait", "trouva", "trouvera", "trouvee", "trouves", "trouvees"]),
    ("fonder", &["fonde", "fondent", "fondait", "fonda", "fondera", "fondee", "fondes", "fondees"]),
    ("creer", &["cree", "creent", "creait", "crea", "creera", "creee", "crees", "creees"]),
    ("ecrire", &["ecrit", "ecrivent", "ecrivait", "ecrivit", "ecrira", "ecrite", "ecrits", "ecrites"]),
    ("publier", &["publie", "publient", "publiait", "publia", "publiera", "publiee", "publies", "publiees"]),
    ("recevoir", &["recoit", "recoivent", "recevait", "recut", "recurent", "recevra", "recu", "recue", "recus", "recues"]),
    ("vivre", &["vit", "vivent", "vivait", "vecut", "vecurent", "vivra", "vecu", "vecue", "vecus", "vecues"]),
    ("jouer", &["joue", "jouent", "jouait", "joua", "jouera", "jouee", "joues", "jouees"]),
    ("gagner", &["gagne", "gagnent", "gagnait", "gagna", "gagnera", "gagnee", "gagnes", "gagnees"]),
    ("remporter", &["remporte", "remportent", "remportait", "remporta", "remportera", "remportee", "remportes", "remportees"]),
    ("connaitre", &["connait", "connaissent", "connaissait", "connut", "connurent", "connaitra", "connu", "connue", "connus", "connues"]),
];

/// The built-in infinitive → conjugated-forms lookup.
pub(crate) static DEFAULT_CONJUGATIONS: Lazy<HashMap<String, Vec<String>>> = Lazy::new(|| {
    CONJUGATIONS
        .iter()
        .map(|&(infinitive, forms)| {
            (infinitive.to_string(), forms.iter().map(|f| f.to_string()).collect())
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize::normalize;

    #[test]
    fn table_is_stored_in_key_form() {
        for (infinitive, forms) in DEFAULT_CONJUGATIONS.iter() {
            assert_eq!(&normalize(infinitive), infinitive);
            for form in forms {
                assert_eq!(&normalize(form), form, "form {form:?} of {infinitive:?}");
            }
        }
    }

    #[test]
    fn birth_verbs_cover_participles() {
        let forms = &DEFAULT_CONJUGATIONS["naitre"];
        assert!(forms.contains(&"nee".to_string()));
        assert!(forms.contains(&"naquit".to_string()));
    }
}
