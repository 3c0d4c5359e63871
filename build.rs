use chrono::Datelike;

fn main() {
    // Year the site was built, shown in the footer
    let build_year = chrono::Utc::now().year();

    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CONTACT_FORM_ACTION");
}
