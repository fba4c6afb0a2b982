/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
