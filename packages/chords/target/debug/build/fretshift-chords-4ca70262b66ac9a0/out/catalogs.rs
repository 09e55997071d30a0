/// Embedded catalog files as ("<tuning>/<vibe>", yaml)
pub static CATALOGS: &[(&str, &str)] = &[
    ("drop/dark", include_str!("/root/crate/packages/chords/library/drop/dark.yaml")),
    ("drop/energetic", include_str!("/root/crate/packages/chords/library/drop/energetic.yaml")),
    ("drop/melodic", include_str!("/root/crate/packages/chords/library/drop/melodic.yaml")),
    ("standard/dark", include_str!("/root/crate/packages/chords/library/standard/dark.yaml")),
    ("standard/energetic", include_str!("/root/crate/packages/chords/library/standard/energetic.yaml")),
    ("standard/melodic", include_str!("/root/crate/packages/chords/library/standard/melodic.yaml")),
];
