use std::process::Command;

use chrono::Utc;

const RELEASE_TAG_PREFIX: &str = "difflint@v";

/// What the build knows about the checkout it was compiled from.
struct VersionStamp {
    package: &'static str,
    release_tag: Option<String>,
    commit: Option<String>,
    dirty: bool,
}

impl VersionStamp {
    fn from_checkout() -> Self {
        let pattern = format!("{RELEASE_TAG_PREFIX}*");
        Self {
            package: env!("CARGO_PKG_VERSION"),
            release_tag: git(&["describe", "--tags", "--exact-match", "--match", &pattern]),
            commit: git(&["rev-parse", "--short=10", "HEAD"]),
            dirty: git(&["status", "--porcelain", "--untracked-files=no"])
                .is_some_and(|status| !status.is_empty()),
        }
    }

    fn is_release(&self) -> bool {
        !self.dirty
            && self
                .release_tag
                .as_deref()
                .and_then(|tag| tag.strip_prefix(RELEASE_TAG_PREFIX))
                == Some(self.package)
    }

    /// Release builds print the bare package version. Anything else gets
    /// semver build metadata so bug reports can be traced to a checkout.
    fn render(&self) -> String {
        if self.is_release() {
            return self.package.to_owned();
        }

        let mut metadata = vec![self.commit.clone().unwrap_or_else(|| "nogit".to_owned())];
        if self.dirty {
            metadata.push("dirty".to_owned());
        }
        metadata.push(Utc::now().format("%Y%m%d").to_string());

        format!("{}+{}", self.package, metadata.join("."))
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|out| out.trim().to_owned())
}

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/tags");
    println!("cargo:rerun-if-changed=../../.git/index");

    let stamp = VersionStamp::from_checkout();
    println!("cargo:rustc-env=DIFFLINT_VERSION={}", stamp.render());
}
