//! MMU zone.
//!
//! The MMU has the most distinct failure points (master/slave TLB setup,
//! arena bookkeeping, buffer mapping), so it fills the first 16 slots of
//! its range. Offsets `0x100-0xFF0` remain free.

use crate::Subsystem;

const BASE: u32 = Subsystem::Mmu.base();

status_codes! {
    MMU_CODES;

    /// Invalid context.
    MMU_CTXT_BAD = group(BASE + 0x000);

    /// MTLB allocation.
    MMU_MTLB_ALLOC = group(BASE + 0x010);

    /// MTLB setting.
    MMU_MTLB_SET = group(BASE + 0x020);

    /// STLB allocation.
    MMU_STLB_ALLOC = group(BASE + 0x030);

    /// STLB index allocation.
    MMU_STLBIDX_ALLOC = group(BASE + 0x040);

    /// Vacant arena allocation.
    MMU_ARENA_ALLOC = group(BASE + 0x050);

    /// No available arenas to allocate.
    MMU_OOM = group(BASE + 0x060);

    /// Safe zone allocation.
    MMU_SAFE_ALLOC = group(BASE + 0x070);

    /// MMU initialization.
    MMU_INIT = group(BASE + 0x080);

    /// Invalid argument.
    MMU_ARG = group(BASE + 0x090);

    /// Client initialization.
    MMU_CLIENT = group(BASE + 0x0A0);

    /// Invalid buffer to map.
    MMU_BUFFER_BAD = group(BASE + 0x0B0);

    /// Bad page within the buffer.
    MMU_PAGE_BAD = group(BASE + 0x0C0);

    /// Page descriptor allocation.
    MMU_DESC_ALLOC = group(BASE + 0x0D0);

    /// Physical page array allocation.
    MMU_PHYS_ALLOC = group(BASE + 0x0E0);

    /// Bad buffer offset.
    MMU_OFFSET = group(BASE + 0x0F0);
}
