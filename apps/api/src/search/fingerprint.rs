use crate::models::resume::ResumeFile;

const SEPARATOR: &str = "|";

/// Builds the cache key for a search.
///
/// One token per resume descriptor (name, size, last-modified), one per
/// company and source (trimmed, lowercased), one for the location, and one
/// per boolean flag. Tokens are sorted before joining, so list order never
/// changes the key. Duplicates are kept.
pub fn compute_fingerprint(
    resumes: &[ResumeFile],
    companies: &[String],
    sources: &[String],
    location: &str,
    willing_to_relocate: bool,
    needs_sponsorship: bool,
) -> String {
    let mut tokens: Vec<String> = resumes
        .iter()
        .map(|r| format!("{}-{}-{}", r.file_name, r.size_bytes, r.last_modified))
        .chain(companies.iter().map(|c| fold(c)))
        .chain(sources.iter().map(|s| fold(s)))
        .collect();

    tokens.push(fold(location));
    tokens.push(format!("relocate-{willing_to_relocate}"));
    tokens.push(format!("sponsorship-{needs_sponsorship}"));

    tokens.sort();
    tokens.join(SEPARATOR)
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(name: &str) -> ResumeFile {
        ResumeFile {
            file_name: name.to_string(),
            size_bytes: 2048,
            last_modified: 1_700_000_000_000,
            text: String::new(),
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_fingerprint_is_order_invariant() {
        let resumes = vec![resume("a.pdf"), resume("b.pdf")];
        let companies = ["Acme", "Globex", "Initech"];
        let sources = ["LinkedIn", "Indeed"];

        let base = compute_fingerprint(
            &resumes,
            &strings(&companies),
            &strings(&sources),
            "Austin, TX",
            true,
            false,
        );

        let permutations = [
            ["Globex", "Initech", "Acme"],
            ["Initech", "Acme", "Globex"],
            ["Acme", "Initech", "Globex"],
        ];
        for perm in permutations {
            let reversed_resumes: Vec<_> = resumes.iter().rev().cloned().collect();
            let fp = compute_fingerprint(
                &reversed_resumes,
                &strings(&perm),
                &strings(&["Indeed", "LinkedIn"]),
                "Austin, TX",
                true,
                false,
            );
            assert_eq!(fp, base);
        }
    }

    #[test]
    fn test_fingerprint_folds_case_and_whitespace() {
        let a = compute_fingerprint(&[], &strings(&["  Acme "]), &strings(&["LinkedIn"]), " Austin ", false, false);
        let b = compute_fingerprint(&[], &strings(&["acme"]), &strings(&["linkedin"]), "austin", false, false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_distinguishes_flags() {
        let companies = strings(&["Acme"]);
        let a = compute_fingerprint(&[], &companies, &[], "", true, false);
        let b = compute_fingerprint(&[], &companies, &[], "", false, false);
        let c = compute_fingerprint(&[], &companies, &[], "", false, true);
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_fingerprint_distinguishes_resume_versions() {
        let companies = strings(&["Acme"]);
        let mut edited = resume("cv.pdf");
        edited.last_modified += 1;
        let a = compute_fingerprint(&[resume("cv.pdf")], &companies, &[], "", false, false);
        let b = compute_fingerprint(&[edited], &companies, &[], "", false, false);
        assert_ne!(a, b);
    }

    #[test]
    fn test_fingerprint_layout() {
        let fp = compute_fingerprint(
            &[resume("cv.pdf")],
            &strings(&["Acme"]),
            &strings(&["LinkedIn"]),
            "NYC",
            false,
            true,
        );
        assert_eq!(
            fp,
            "acme|cv.pdf-2048-1700000000000|linkedin|nyc|relocate-false|sponsorship-true"
        );
    }
}
