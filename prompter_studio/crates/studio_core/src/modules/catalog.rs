pub const GENRES: &[&str] = &[
    "Acid House",
    "Acid Jazz",
    "Afrobeat",
    "Afro House",
    "Afro Pop",
    "Afro Punk",
    "Aggrotech",
    "Alternative",
    "Alternative Country",
    "Alternative Dance",
    "Alternative Hip Hop",
    "Alternative Metal",
    "Alternative Rock",
    "Ambient",
    "Anime",
    "Arabic Pop",
    "Arena Rock",
    "Arpa",
    "Art Pop",
    "Art Rock",
    "Asia Pop",
    "Atmospheric Black Metal",
    "Atmospheric Drum and Bass",
    "Atmospheric Folk Black Metal",
    "Atmospheric Sludge Metal",
    "Avant-Garde",
    "Avant-Garde Black Metal",
    "Avant-Garde Jazz",
    "Bachata",
    "Bachata Urbana",
    "Banda",
    "Baroque Pop",
    "Bass House",
    "Bass Music",
    "Bassline",
    "Bebop",
    "Big Band",
    "Black Metal",
    "Bluegrass",
    "Blues",
    "Blues Rock",
    "Bollywood",
    "Bongo Flava",
    "Bossa Nova",
    "Breakbeat",
    "Breakcore",
    "Britpop",
    "Brostep",
    "Bubblegum Dance",
    "City Pop",
    "Japanese City Pop",
    "Korean City Pop",
    "Japanese Fusion",
    "Cantonese Pop",
    "Celtic",
    "Celtic Folk",
    "Celtic Punk",
    "Chill Hop",
    "Chill Trance",
    "Chillwave",
    "Chinese Hip Hop",
    "Chinese Pop",
    "Christian & Gospel",
    "Christian Alternative Rock",
    "Christian Metal",
    "Christian Pop",
    "Christian Rock",
    "Classic Blues",
    "Classic Country",
    "Classic Hip Hop",
    "Classic House",
    "Classic Rock",
    "Classical",
    "Club",
    "Comedy",
    "Complextro",
    "Contemporary Blues",
    "Contemporary Country",
    "Contemporary Folk",
    "Contemporary R&B",
    "Cool Jazz",
    "Country",
    "Country Blues",
    "Country Folk",
    "Country Pop",
    "Crunk",
    "Crust Punk",
    "Cybergrind",
    "Dance",
    "DancePop",
    "DancePunk",
    "Dancehall",
    "Dark Ambient",
    "Dark Electro",
    "Dark Folk",
    "Dark Psytrance",
    "Darkwave",
    "Death Metal",
    "Deathcore",
    "Deep House",
    "Delta Blues",
    "Desert Rock",
    "Detroit Techno",
    "Digital Hardcore",
    "Disco",
    "Dixieland",
    "Djent",
    "Doom Metal",
    "Downtempo",
    "Dream Pop",
    "Drone",
    "Drum and Bass",
    "Dub",
    "Dub Techno",
    "Dubstep",
    "Dubstep Riddim",
    "Early Music",
    "East Coast Hip Hop",
    "Easy Listening",
    "EDM",
    "Electro",
    "Electro House",
    "Electro Pop",
    "Electro Rock",
    "Electronic",
    "Electronic Body Music",
    "Electronica",
    "Electropop",
    "Emo",
    "Enka",
    "Ethnic Electronica",
    "Europop",
    "Experimental",
    "Experimental Electronic",
    "Experimental Hip Hop",
    "Experimental Metal",
    "Fado",
    "Folk",
    "Folk Black Metal",
    "Folk Metal",
    "Folk Pop",
    "Folktronica",
    "Freak Folk",
    "Frenchcore",
    "Funk",
    "Funeral Doom Metal",
    "Funky House",
    "Fusion",
    "Gabber",
    "Gangsta Rap",
    "Garage",
    "Garage House",
    "Garage Rock",
    "German Hip Hop",
    "Glam Metal",
    "Glam Rock",
    "Glitch Hop",
    "Gospel",
    "Gothic Metal",
    "Gothic Rock",
    "Grime",
    "Grindcore",
    "Grunge",
    "Gypsy Jazz",
    "Happy Hardcore",
    "Hard Bop",
    "Hard House",
    "Hard Rock",
    "Hard Techno",
    "Hard Trance",
    "Hardcore",
    "Hardcore Hip Hop",
    "Hardcore Punk",
    "Hands Up",
    "Happy Punk",
    "Heavy Metal",
    "Hi-NRG",
    "Highlife",
    "Hip Hop",
    "Hip Hop Beats",
    "Holiday",
    "Honky Tonk",
    "House",
    "IDM",
    "Indian Pop",
    "Indie",
    "Indie Dance",
    "Indie Electronic",
    "Indie Folk",
    "Indie Pop",
    "Indie Rock",
    "Industrial",
    "Industrial Metal",
    "Industrial Rock",
    "Instrumental Hip Hop",
    "Instrumental Rock",
    "Intelligent Dance Music",
    "Irish Folk",
    "Italo Dance",
    "Italo Disco",
    "J-Pop",
    "J-Rock",
    "Jam Band",
    "Jazz",
    "Jazz Blues",
    "Jazz Fusion",
    "Jazz Funk",
    "Jazz Rap",
    "Jazz Rock",
    "Jungle",
    "K-Pop",
    "Kayokyoku",
    "Kizomba",
    "Krautrock",
    "Latin",
    "Latin Ballad",
    "Latin Hip Hop",
    "Latin Jazz",
    "Latin Pop",
    "Latin Rock",
    "LoFi",
    "LoFi Hip Hop",
    "Lounge",
    "Lowercase",
    "Madchester",
    "Mainstream Hip Hop",
    "Malaysian Pop",
    "Mambo",
    "Manele",
    "Maringue",
    "Mathcore",
    "Math Rock",
    "Medieval Folk",
    "Melodic Black Metal",
    "Melodic Death Metal",
    "Melodic Hardcore",
    "Melodic Metalcore",
    "Metal",
    "Metalcore",
    "Mexican Pop",
    "Microhouse",
    "Military Music",
    "Minimal",
    "Minimal Techno",
    "Modern Classical",
    "Modal Jazz",
    "Motown",
    "Neo Classical",
    "Neo Classical Darkwave",
    "Neo Classical Metal",
    "Neo Folk",
    "Neo Psychedelia",
    "Neo Soul",
    "Neofolk",
    "New Age",
    "New Jack Swing",
    "New Romantic",
    "New Wave",
    "New Wave Pop",
    "Nintendocore",
    "Noise",
    "Noise Pop",
    "Noisecore",
    "Nu Disco",
    "Nu Gaze",
    "Nu Jazz",
    "Nu Metal",
    "Oi!",
    "Old School Hip Hop",
    "Old-time Music",
    "Opera",
    "Outlaw Country",
    "Outsider House",
    "P-Funk",
    "Pagan Black Metal",
    "Pagan Metal",
    "Paisley Pop",
    "Pop",
    "Pop Punk",
    "Pop Rap",
    "Pop Rock",
    "Post Britpop",
    "Post Grunge",
    "Post Hardcore",
    "Post Metal",
    "Post Punk",
    "Post Rock",
    "Power Electronics",
    "Power Metal",
    "Power Pop",
    "Progressive",
    "Progressive Death Metal",
    "Progressive Electronic",
    "Progressive Folk",
    "Progressive House",
    "Progressive Metal",
    "Progressive Rock",
    "Psy_Trance",
    "Psychedelic",
    "Psychedelic Blues",
    "Psychedelic Folk",
    "Psychedelic Pop",
    "Psychedelic Rock",
    "Psychobilly",
    "Punk",
    "Punk Blues",
    "Punk Folk",
    "Punk Rock",
    "Queercore",
    "R&B",
    "Ragga-Jungle",
    "Raggaeton",
    "Raggae",
    "Ragtime",
    "Rap",
    "Rap Metal",
    "Rap Rock",
    "Rapcore",
    "Rave",
    "Reggae",
    "Reggaeton",
    "Regional Mexican",
    "Retro Electro",
    "Retro Rock",
    "Riot Grrrl",
    "Rock & Roll",
    "Rockabilly",
    "Rocksteady",
    "Roots Reggae",
    "Roots Rock",
    "Salsa",
    "Sambas",
    "Samba",
    "Sanat Müziği",
    "Schlager",
    "Screamo",
    "Shoegaze",
    "Singer-Songwriter",
    "Ska",
    "Ska Punk",
    "Skate Punk",
    "Slowcore",
    "Sludge Metal",
    "Smooth Jazz",
    "Soft Rock",
    "Soul",
    "Soul Funk",
    "Soundtrack",
    "Southern Rock",
    "Southern Soul",
    "Spanish Pop",
    "Speed Garage",
    "Speed Metal",
    "Speedcore",
    "Spoken Word",
    "Stoner Rock",
    "Straight Edge",
    "Surf Rock",
    "Swing",
    "Synth-pop",
    "Synthpop",
    "Synthwave",
    "T-Pop",
    "Tamil Pop",
    "Tech House",
    "Technical Death Metal",
    "Techno",
    "Tejano",
    "Terrorcore",
    "Thai Pop",
    "Thrash Metal",
    "Third Stream",
    "Timba",
    "Traditional Blues",
    "Traditional Celtic",
    "Traditional Country",
    "Traditional Folk",
    "Traditional Irish",
    "Trance",
    "Trap",
    "Trap Metal",
    "Tribal House",
    "Trip Hop",
    "Turkish Pop",
    "Turkish Rock",
    "Turk Halk Müziği",
    "Turk Sanat Müziği",
    "UK Garage",
    "UK Hip Hop",
    "Underground Hip Hop",
    "Urban Contemporary",
    "V-Pop",
    "Vallenato",
    "Vaporwave",
    "Viking Metal",
    "Visual Kei",
    "Vocal House",
    "Vocal Trance",
    "World",
    "World Beat",
    "World Fusion",
    "World Music",
    "Xmas",
    "Yacht Rock",
    "Zouk",
    "Worship",
];

pub const MOODS: &[&str] = &[
    "Happy",
    "Joyful",
    "Cheerful",
    "Euphoric",
    "Blissful",
    "Upbeat",
    "Lighthearted",
    "Playful",
    "Whimsical",
    "Fun",
    "Jovial",
    "Exuberant",
    "Energetic",
    "Lively",
    "Excited",
    "Enthusiastic",
    "Optimistic",
    "Hopeful",
    "Uplifting",
    "Inspirational",
    "Empowering",
    "Confident",
    "Triumphant",
    "Victorious",
    "Proud",
    "Heroic",
    "Celebratory",
    "Festive",
    "Romantic",
    "Passionate",
    "Loving",
    "Affectionate",
    "Sensual",
    "Sexy",
    "Intimate",
    "Sentimental",
    "Warm",
    "Cozy",
    "Nostalgic",
    "Reflective",
    "Contemplative",
    "Thoughtful",
    "Meditative",
    "Calm",
    "Peaceful",
    "Serene",
    "Soothing",
    "Relaxing",
    "Tranquil",
    "Dreamy",
    "Ethereal",
    "Wistful",
    "Pensive",
    "Philosophical",
    "Mysterious",
    "Enigmatic",
    "Suspenseful",
    "Tense",
    "Anxious",
    "Nervous",
    "Apprehensive",
    "Fearful",
    "Scary",
    "Ominous",
    "Dark",
    "Brooding",
    "Melancholic",
    "Sad",
    "Sorrowful",
    "Mournful",
    "Grieving",
    "Heartbroken",
    "Despairing",
    "Depressed",
    "Gloomy",
    "Bleak",
    "Lonely",
    "Isolated",
    "Alienated",
    "Bittersweet",
    "Poignant",
    "Tragic",
    "Angry",
    "Aggressive",
    "Hostile",
    "Defiant",
    "Rebellious",
    "Resentful",
    "Frustrated",
    "Irritated",
    "Bitter",
    "Cynical",
    "Sarcastic",
    "Sardonic",
    "Dramatic",
    "Intense",
    "Powerful",
    "Dynamic",
    "Ambiguous",
    "Complex",
    "Conflicted",
    "Confused",
    "Uncertain",
    "Ambivalent",
    "Vulnerable",
    "Fragile",
    "Delicate",
    "Somber",
    "Grave",
    "Serious",
    "Solemn",
    "Heavy",
    "Weighty",
    "Profound",
    "Deep",
    "Thought-provoking",
    "Intellectual",
    "Cerebral",
    "Innocent & Pure",
    "Childlike",
    "Innocent",
    "Pure",
    "Simple",
    "Naive",
    "Guileless",
    "Trusting",
    "Open",
    "Honest",
    "Sincere",
    "Direct",
    "Uncomplicated",
    "Clear",
    "Lucid",
    "Refreshing",
    "Revitalizing",
    "Invigorating",
    "Stimulating",
    "Exciting",
    "Thrilling",
    "Exhilarating",
    "Electrifying",
    "Animated",
    "Sprightly",
    "Peppy",
    "Bouncy",
    "Hypnotic",
    "Trance-inducing",
    "Ambient",
    "Atmospheric",
    "Evocative",
    "Suggestive",
    "Imaginative",
    "Cathartic",
    "Therapeutic",
    "Healing",
    "Comforting",
    "Nurturing",
    "Gentle",
    "Soft",
    "Tender",
    "Yearning",
    "Longing",
    "Retrospective",
    "Forward-looking",
    "Humble",
    "Modest",
    "Unassuming",
];

/// Case-insensitive substring filter; an empty query keeps every item.
pub fn filter<'a>(items: &[&'a str], query: &str) -> Vec<&'a str> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .copied()
        .filter(|item| item.to_lowercase().contains(&q))
        .collect()
}

/// Canonical spelling of `name` in `items`, ignoring case and surrounding whitespace.
pub fn lookup<'a>(items: &[&'a str], name: &str) -> Option<&'a str> {
    let name = name.trim();
    items
        .iter()
        .copied()
        .find(|item| item.to_lowercase() == name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lists_have_no_case_insensitive_duplicates() {
        for list in [GENRES, MOODS] {
            let uniq: HashSet<String> = list.iter().map(|s| s.to_lowercase()).collect();
            assert_eq!(uniq.len(), list.len());
        }
    }

    #[test]
    fn filter_matches_substrings_in_order() {
        let hits = filter(GENRES, "city pop");
        assert_eq!(hits, vec!["City Pop", "Japanese City Pop", "Korean City Pop"]);
        assert_eq!(filter(MOODS, "  ").len(), MOODS.len());
        assert!(filter(MOODS, "zzz").is_empty());
    }

    #[test]
    fn lookup_returns_canonical_spelling() {
        assert_eq!(lookup(GENRES, " neo soul "), Some("Neo Soul"));
        assert_eq!(lookup(MOODS, "THRILLING"), Some("Thrilling"));
        assert_eq!(lookup(GENRES, "Neo"), None);
    }

    #[test]
    fn non_ascii_entries_are_searchable() {
        assert_eq!(filter(GENRES, "müziği").len(), 3);
    }
}
