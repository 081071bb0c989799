use crate::domain::VersionPackage;

/// A display line for one available package: a label and the URL to fetch.
#[derive(PartialEq, Clone, Debug)]
pub struct PackageLine {
    pub label: String,
    pub url: String,
}

/// Derives the display line for each package, preserving input order. A purely
/// numeric version number is a build id whose package directory carries a
/// changelog; anything else points at the full filelist.
pub fn map_versions(packages: &[VersionPackage]) -> Vec<PackageLine> {
    packages.iter().map(map_package).collect()
}

fn map_package(package: &VersionPackage) -> PackageLine {
    if is_build_id(&package.version_number) {
        let mut url = package.url.clone();
        if !url.ends_with('/') {
            url.push('/');
        }
        url.push_str("changelog.xml");

        PackageLine {
            label: format!("{} (Changelog)", package.version_number),
            url,
        }
    } else {
        PackageLine {
            label: package.version_number.clone(),
            url: format!("{}full/filelist.xml", package.url),
        }
    }
}

fn is_build_id(version_number: &str) -> bool {
    !version_number.is_empty() && version_number.chars().all(|c| c.is_ascii_digit())
}
