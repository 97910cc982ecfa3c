//! Breed catalog and search filter.

/// Fallback entry for dogs of mixed breed.
pub const MIXED_BREED: &str = "Mischling";

/// Fallback entry for owners who do not know the breed.
pub const UNKNOWN_BREED: &str = "Weiß ich nicht";

/// All selectable breeds, in display order. The fallbacks come last.
pub const BREEDS: &[&str] = &[
    "Labrador Retriever",
    "Deutscher Schäferhund",
    "Golden Retriever",
    "Französische Bulldogge",
    "Dackel",
    "Chihuahua",
    "Rottweiler",
    "Australian Shepherd",
    "Beagle",
    "Pudel",
    "Border Collie",
    "Boxer",
    "Dobermann",
    "Shih Tzu",
    "Cavalier King Charles Spaniel",
    "Malteser",
    "Havaneser",
    "Yorkshire Terrier",
    "Bernhardiner",
    "Berner Sennenhund",
    "Jack Russell Terrier",
    "Siberian Husky",
    "Cocker Spaniel",
    "Zwergspitz / Pomeranian",
    "Dalmatiner",
    "Rhodesian Ridgeback",
    "Weimaraner",
    "Magyar Vizsla",
    "Akita Inu",
    "Shiba Inu",
    "Mops",
    "Englische Bulldogge",
    "Whippet",
    "Greyhound",
    "Deutsche Dogge",
    "Irischer Wolfshund",
    "Neufundländer",
    "Collie",
    "Shetland Sheepdog",
    "Belgischer Schäferhund (Malinois)",
    "Miniature Schnauzer",
    "Riesenschnauzer",
    "Staffordshire Bullterrier",
    "American Staffordshire Terrier",
    "Samojede",
    "Eurasier",
    "Leonberger",
    "Flat Coated Retriever",
    "Airedale Terrier",
    "West Highland White Terrier",
    MIXED_BREED,
    UNKNOWN_BREED,
];

/// Case-insensitive substring search over the catalog, keeping catalog order.
///
/// An empty (or whitespace-only) query returns every breed.
pub fn filter_breeds(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return BREEDS.to_vec();
    }
    BREEDS
        .iter()
        .copied()
        .filter(|breed| breed.to_lowercase().contains(&needle))
        .collect()
}

/// Whether `name` is an exact catalog entry.
pub fn is_known_breed(name: &str) -> bool {
    BREEDS.contains(&name)
}
