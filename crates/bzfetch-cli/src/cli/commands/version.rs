use bzfetch_core::release;

pub fn run_version() {
    println!("{}", release::package_version());
}
