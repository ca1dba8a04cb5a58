// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language and territory display names for Teso (`teo`).

pub(super) const TABLE: &[(&str, &str)] = &[
    // Language subtags
    ("ak", "Kiakan"),
    ("am", "Kiamhari"),
    ("ar", "Kiarabu"),
    ("be", "Kibelarusi"),
    ("bg", "Kibulgaria"),
    ("bn", "Kibangla"),
    ("cs", "Kichecki"),
    ("de", "Kijerumani"),
    ("el", "Kigiriki"),
    ("en", "Kingereza"),
    ("es", "Kihispania"),
    ("fa", "Kiajemi"),
    ("fr", "Kifaransa"),
    ("ha", "Kihausa"),
    ("hi", "Kihindi"),
    ("hu", "Kihungari"),
    ("id", "Kiindonesia"),
    ("ig", "Kiigbo"),
    ("it", "Kiitaliano"),
    ("ja", "Kijapani"),
    ("jv", "Kijava"),
    ("km", "Kikambodia"),
    ("ko", "Kikorea"),
    ("ms", "Kimalesia"),
    ("my", "Kiburma"),
    ("ne", "Kinepali"),
    ("nl", "Kiholanzi"),
    ("pa", "Kipunjabi"),
    ("pl", "Kipolandi"),
    ("pt", "Kireno"),
    ("ro", "Kiromania"),
    ("ru", "Kirusi"),
    ("rw", "Kinyarwanda"),
    ("so", "Kisomali"),
    ("sv", "Kiswidi"),
    ("ta", "Kitamil"),
    ("teo", "Kiteso"),
    ("th", "Kitailandi"),
    ("tr", "Kituruki"),
    ("uk", "Kiukrania"),
    ("ur", "Kiurdu"),
    ("vi", "Kivietinamu"),
    ("yo", "Kiyoruba"),
    ("zh", "Kichina"),
    ("zu", "Kizulu"),
    // Territory codes
    ("BI", "Burundi"),
    ("CN", "China"),
    ("DE", "Ujerumani"),
    ("FR", "Ufaransa"),
    ("GB", "Uingereza"),
    ("IN", "India"),
    ("JP", "Japani"),
    ("KE", "Kenia"),
    ("NG", "Nigeria"),
    ("RU", "Urusi"),
    ("RW", "Rwanda"),
    ("SD", "Sudan"),
    ("SO", "Somalia"),
    ("TZ", "Tanzania"),
    ("UG", "Uganda"),
    ("US", "Marekani"),
    ("ZA", "Afrika Kusini"),
];
