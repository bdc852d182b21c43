//! Static relation databases.
//!
//! A pre-generated clue→target table (a guessed clue counts as "close to" its
//! target word) and a list of semantic categories (a guessed member counts as
//! close to every other member). Entries are raw, mixed-case, accented French;
//! the engine normalizes and document-filters them at load time in
//! `engine::relation`, so this file stays a plain data dump.

use crate::api::RelationData;

/// Clue → target pairs. The key is the clue (synonym, related term), the
/// value the target expected to appear in an article. Offline-generated; a
/// production deployment would swap in a much larger file.
pub(crate) static RELATED_WORDS: &[(&str, &str)] = &[
    // general concepts
    ("foyer", "maison"),
    ("domicile", "maison"),
    ("résidence", "maison"),
    ("bâtiment", "édifice"),
    ("construction", "édifice"),
    ("automobile", "voiture"),
    ("véhicule", "voiture"),
    ("conflit", "guerre"),
    ("affrontement", "guerre"),
    ("combat", "bataille"),
    ("lutte", "bataille"),
    ("militaire", "soldat"),
    ("combattant", "soldat"),
    ("souverain", "roi"),
    ("monarque", "roi"),
    ("souveraine", "reine"),
    ("forteresse", "château"),
    ("palais", "château"),
    ("eau", "fleuve"),
    ("rivière", "fleuve"),
    ("mer", "océan"),
    ("navire", "bateau"),
    ("voilier", "bateau"),
    ("siècle", "année"),
    ("décennie", "année"),
    ("millénaire", "année"),
    ("couronne", "roi"),
    // people & roles
    ("auteur", "écrivain"),
    ("artiste", "peintre"),
    ("sculpteur", "artiste"),
    ("musicien", "compositeur"),
    ("dirigeant", "président"),
    ("gouvernement", "ministre"),
    ("parlement", "député"),
    ("chef", "général"),
    ("docteur", "médecin"),
    ("savant", "scientifique"),
    ("chercheur", "scientifique"),
    ("athlète", "joueur"),
    ("sportif", "joueur"),
    // actions
    ("créer", "développer"),
    ("construire", "développer"),
    ("fabriquer", "produire"),
    ("gagner", "remporter"),
    ("obtenir", "remporter"),
    ("diriger", "gouverner"),
    ("commander", "gouverner"),
    ("trouver", "découvrir"),
    ("inventer", "découvrir"),
    ("commencer", "débuter"),
    ("terminer", "finir"),
    ("achever", "finir"),
    // places
    ("capitale", "pays"),
    ("métropole", "ville"),
    ("nation", "pays"),
    ("état", "pays"),
    ("école", "université"),
    ("collège", "université"),
    ("aéroport", "avion"),
    ("gare", "train"),
    ("port", "bateau"),
    ("montagne", "sommet"),
    ("frontière", "pays"),
    // arts & science
    ("tableau", "peinture"),
    ("oeuvre", "peinture"),
    ("livre", "roman"),
    ("mélodie", "musique"),
    ("chanson", "musique"),
    ("film", "cinéma"),
    ("maths", "mathématiques"),
    ("chiffre", "nombre"),
    ("mathématique", "nombre"),
    ("physique", "science"),
    ("chimie", "science"),
    ("biologie", "science"),
    ("astronomie", "science"),
    ("étoile", "soleil"),
    ("planète", "terre"),
    ("roman", "livre"),
    ("poésie", "livre"),
    ("théâtre", "pièce"),
    ("opéra", "musique"),
    ("symphonie", "musique"),
    ("scénario", "film"),
    ("acteur", "film"),
    ("actrice", "film"),
    ("réalisateur", "film"),
    ("caméra", "film"),
    // history
    ("ancien", "antique"),
    ("révolution", "histoire"),
    ("empire", "royaume"),
    ("dynastie", "royaume"),
    ("époque", "période"),
    ("ère", "période"),
    // adjectives
    ("grand", "important"),
    ("essentiel", "important"),
    ("célèbre", "connu"),
    ("populaire", "connu"),
    ("puissant", "influent"),
    ("riche", "prospère"),
    ("beau", "joli"),
    ("difficile", "complexe"),
    ("facile", "simple"),
    ("rapide", "vite"),
    ("lent", "doucement"),
    // family & derivations
    ("royal", "roi"),
    ("royauté", "roi"),
    ("présidence", "président"),
    ("présidentiel", "président"),
    ("gouvernemental", "gouvernement"),
    ("historique", "histoire"),
    ("scientifiquement", "science"),
    ("musical", "musique"),
    ("politique", "gouvernement"),
    ("économique", "économie"),
    ("religieux", "religion"),
    ("culturel", "culture"),
    // related concepts
    ("conduire", "voiture"),
    ("piloter", "avion"),
    ("naviguer", "bateau"),
    ("peindre", "peinture"),
    ("composer", "musique"),
    ("filmer", "cinéma"),
    ("voter", "élection"),
    ("étudier", "école"),
    ("enseigner", "école"),
    ("église", "religion"),
    ("temple", "religion"),
    ("mosquée", "religion"),
    ("banque", "argent"),
    ("hôpital", "médecin"),
    ("tribunal", "loi"),
    ("juge", "loi"),
    ("avocat", "loi"),
    ("général", "armée"),
    ("colonel", "armée"),
    ("soldat", "armée"),
    ("marine", "bateau"),
    ("aviation", "avion"),
    ("infanterie", "armée"),
    // thematic & abstract
    ("liberté", "révolution"),
    ("égalité", "révolution"),
    ("justice", "loi"),
    ("pouvoir", "gouvernement"),
    ("argent", "économie"),
    ("amour", "famille"),
    ("haine", "guerre"),
    ("paix", "guerre"),
    ("victoire", "bataille"),
    ("défaite", "bataille"),
    ("lumière", "jour"),
    ("obscurité", "nuit"),
    ("chaud", "température"),
    ("froid", "température"),
    ("démocratie", "gouvernement"),
    ("république", "gouvernement"),
    ("monarchie", "roi"),
    ("dictature", "gouvernement"),
    // technology & modern life
    ("ordinateur", "technologie"),
    ("logiciel", "ordinateur"),
    ("internet", "réseau"),
    ("téléphone", "communication"),
    ("électricité", "énergie"),
    ("moteur", "voiture"),
    // sports & hobbies
    ("football", "sport"),
    ("tennis", "sport"),
    ("basket", "sport"),
    ("ballon", "football"),
    ("raquette", "tennis"),
    // geography
    ("paris", "france"),
    ("londres", "angleterre"),
    ("berlin", "allemagne"),
    ("rome", "italie"),
    ("madrid", "espagne"),
    ("drapeau", "pays"),
    ("hymne", "pays"),
    // food & drink
    ("boire", "eau"),
    ("manger", "nourriture"),
    ("fruit", "pomme"),
    ("légume", "carotte"),
    ("vin", "raisin"),
    ("fromage", "lait"),
    ("pain", "farine"),
    ("sucre", "doux"),
    // nature & animals
    ("animal", "espèce"),
    ("félin", "chat"),
    ("canin", "chien"),
    ("oiseau", "voler"),
    ("poisson", "nager"),
    ("insecte", "fourmi"),
    ("arbre", "forêt"),
    ("feuille", "arbre"),
    ("racine", "arbre"),
    ("fleur", "plante"),
    ("désert", "sable"),
    ("volcan", "lave"),
    // body & health
    ("corps", "humain"),
    ("tête", "cerveau"),
    ("main", "doigt"),
    ("pied", "jambe"),
    ("coeur", "sang"),
    ("oeil", "vision"),
    ("oreille", "audition"),
    ("nez", "odorat"),
    ("bouche", "parole"),
    ("maladie", "médecin"),
    ("guérison", "médecin"),
    // materials & objects
    ("bois", "arbre"),
    ("métal", "fer"),
    ("plastique", "pétrole"),
    ("verre", "sable"),
    ("tissu", "vêtement"),
    ("pierre", "roche"),
    ("papier", "livre"),
];

/// Semantic categories: guessing any member counts as close to every hidden
/// member of the same set. Registration order matters: a word appearing in
/// several sets belongs to the last one registered.
pub(crate) static SEMANTIC_CATEGORIES: &[&[&str]] = &[
    // time
    &[
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    &["lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche"],
    // visuals
    &[
        "rouge", "bleu", "vert", "jaune", "noir", "blanc", "orange", "violet", "rose", "marron",
        "gris",
    ],
    &[
        "cercle", "carré", "triangle", "rectangle", "ovale", "losange", "pentagone", "hexagone",
        "étoile",
    ],
    // geography
    &["nord", "sud", "est", "ouest"],
    &["afrique", "amérique", "antarctique", "asie", "europe", "océanie"],
    &["mercure", "vénus", "terre", "mars", "jupiter", "saturne", "uranus", "neptune"],
    // science & materials
    &[
        "physique", "chimie", "biologie", "astronomie", "géologie", "mathématiques", "médecine",
        "informatique",
    ],
    &["or", "argent", "cuivre", "fer", "plomb", "zinc", "aluminium", "étain", "platine"],
    // arts & culture
    &[
        "piano", "guitare", "violon", "batterie", "trompette", "saxophone", "flûte", "clarinette",
        "basse", "harpe", "violoncelle", "synthétiseur",
    ],
    &[
        "javascript", "python", "java", "typescript", "php", "ruby", "go", "swift", "kotlin",
        "rust", "sql", "html", "css",
    ],
    // human experience
    &[
        "joie", "tristesse", "colère", "peur", "surprise", "dégoût", "amour", "haine", "bonheur",
        "anxiété", "jalousie", "confiance", "espoir",
    ],
    &[
        "père", "mère", "fils", "fille", "frère", "sœur", "oncle", "tante", "cousin", "cousine",
        "grand-père", "grand-mère",
    ],
];

/// Assemble the built-in relation data in registration order.
pub(crate) fn default_data() -> RelationData {
    RelationData {
        pairs: RELATED_WORDS
            .iter()
            .map(|&(clue, target)| (clue.to_string(), target.to_string()))
            .collect(),
        categories: SEMANTIC_CATEGORIES
            .iter()
            .map(|set| set.iter().map(|w| w.to_string()).collect())
            .collect(),
    }
}
