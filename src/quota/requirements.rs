//! Quota requirement formulas.
//!
//! Each scan worker batches `batch_size` target VMs and consumes 2 virtual
//! cores; without a NAT gateway each worker also needs its own public IP.
//! Fractional worker counts always round up.

/// Default number of VMs one scan worker processes concurrently.
pub const DEFAULT_BATCH_SIZE: u64 = 4;

/// Regional vCPU requirement: `ceil(vm_count * 2 / batch_size)`.
pub fn required_vcpus(vm_count: u64, batch_size: u64) -> u64 {
    (vm_count * 2).div_ceil(batch_size)
}

/// Regional public IP requirement: a single NAT gateway serves all workers
/// in a region; without one, each worker needs its own public IP.
pub fn required_public_ips(vm_count: u64, use_nat_gateway: bool, batch_size: u64) -> u64 {
    if use_nat_gateway {
        1
    } else {
        vm_count.div_ceil(batch_size)
    }
}
