//! Property tests for version extraction, lookup and redirects.

use proptest::prelude::*;

use doc_version_select::domain::version::{
    RedirectStrategy, UrlStrategy, VersionEntry, VersionManifest, VersionToken,
};

// =============================================================================
// Generators
// =============================================================================

/// A path segment that is never itself a version token.
fn plain_segment() -> impl Strategy<Value = String> {
    "[a-z][a-z_-]{0,7}".prop_filter("must not be a version token", |s| !VersionToken::is_token(s))
}

fn version_token() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..20, 0u32..20, 0u32..20).prop_map(|(a, b, c)| format!("{}.{}.{}", a, b, c)),
        (0u32..5, 0u32..5, 0u32..5, 1u32..4)
            .prop_map(|(a, b, c, rc)| format!("{}.{}.{}-rc{}", a, b, c, rc)),
        Just("dev".to_string()),
        Just("stable".to_string()),
    ]
}

/// Doc path below the version directory, with or without a trailing `/`.
fn doc_path() -> impl Strategy<Value = String> {
    (prop::collection::vec(plain_segment(), 0..4), any::<bool>()).prop_map(|(segments, dir)| {
        let mut path = segments.join("/");
        if dir && !path.is_empty() {
            path.push('/');
        }
        path
    })
}

fn full_root() -> impl Strategy<Value = String> {
    prop::collection::vec(plain_segment(), 0..3).prop_map(|segments| {
        let mut root = "https://example.org/".to_string();
        for segment in segments {
            root.push_str(&segment);
            root.push('/');
        }
        root
    })
}

/// Roots for the `/<site>/<version>/` layout read by the default segment index.
fn site_root() -> impl Strategy<Value = String> {
    (any::<bool>(), plain_segment()).prop_map(|(absolute, site)| {
        if absolute {
            format!("https://example.org/{}/", site)
        } else {
            format!("/{}/", site)
        }
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn regex_strategy_extracts_version_and_reconstructs(
        root in full_root(),
        version in version_token(),
        path in doc_path(),
    ) {
        let url = format!("{}{}/{}", root, version, path);
        let context = UrlStrategy::RegexOnFullUrl.resolve(&url).unwrap();

        prop_assert_eq!(context.current_token().as_str(), version.as_str());
        prop_assert_eq!(context.base_root(), root.as_str());
        prop_assert_eq!(context.doc_path(), path.as_str());
        prop_assert_eq!(context.reconstruct(), url);
    }

    #[test]
    fn path_segment_strategy_extracts_version_and_reconstructs(
        root in site_root(),
        version in version_token(),
        path in doc_path(),
    ) {
        let url = format!("{}{}/{}", root, version, path);
        let context = UrlStrategy::PathSegment { index: 2 }.resolve(&url).unwrap();

        prop_assert_eq!(context.current_token().as_str(), version.as_str());
        prop_assert_eq!(context.base_root(), root.as_str());
        prop_assert_eq!(context.reconstruct(), url);
    }

    #[test]
    fn lookup_is_total_over_versions_and_aliases(
        names in prop::collection::hash_set("[a-z]{1,6}", 2..16),
        entry_count in 1usize..6,
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let entry_count = entry_count.min(names.len());
        let (versions, aliases) = names.split_at(entry_count);

        let mut entries: Vec<VersionEntry> = versions
            .iter()
            .map(|v| VersionEntry::new(v.clone(), v.to_uppercase()))
            .collect();
        for (i, alias) in aliases.iter().enumerate() {
            let owner = &mut entries[i % entry_count];
            owner.aliases.push(alias.clone());
        }
        let manifest = VersionManifest::new(entries.clone());
        prop_assert!(manifest.validate().is_ok());

        for entry in &entries {
            prop_assert_eq!(&manifest.resolve(&entry.version).unwrap().version, &entry.version);
            for alias in &entry.aliases {
                prop_assert_eq!(&manifest.resolve(alias).unwrap().version, &entry.version);
            }
        }
    }

    #[test]
    fn choosing_an_option_lands_on_that_version(
        root in full_root(),
        versions in prop::collection::btree_set(version_token(), 2..6),
        path in doc_path(),
        pick in any::<prop::sample::Index>(),
        keep_path in any::<bool>(),
    ) {
        let versions: Vec<String> = versions.into_iter().collect();
        let manifest = VersionManifest::new(
            versions.iter().map(|v| VersionEntry::new(v.clone(), v.clone())).collect(),
        );

        let current = &versions[0];
        let url = format!("{}{}/{}", root, current, path);
        let context = UrlStrategy::RegexOnFullUrl.resolve(&url).unwrap();
        let real = &manifest.resolve(context.current_token().as_str()).unwrap().version;

        let options = manifest.visible_options(real);
        let chosen = &options[pick.index(options.len())].value;

        let redirect = if keep_path {
            RedirectStrategy::PreservePath
        } else {
            RedirectStrategy::VersionRootOnly
        };
        let target = redirect.redirect_url(&context, chosen);
        let landed = UrlStrategy::RegexOnFullUrl.resolve(&target).unwrap();

        prop_assert_eq!(landed.current_token().as_str(), chosen.as_str());
    }
}
