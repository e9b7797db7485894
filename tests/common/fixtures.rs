//! Static dependency-record corpora used across harnesses.
//!
//! Paths follow the layout of a unikraft build tree: core libraries under
//! `unikraft/lib/`, external library checkouts under `libs/`, applications
//! under `apps/`.

/// Records that each match exactly one pattern and are well formed.
pub const CORPUS_WELL_FORMED: &[&str] = &[
    "unikraft/lib/nolibc/stdio.c printf called_by_main",
    "unikraft/lib/uknetdev/netdev.c uk_netdev_count called_by_lwip_init",
    "unikraft/lib/ukboot/boot.c ukplat_entry called_by_start",
    "libs/lwip/init.c lwip_init called_by_ukboot",
    "libs/newlib/musl-imported/src/exit/assert.c __assert_fail called_by_main",
    "libs/tlsf/glue.c tlsf_malloc called_by_uk_malloc",
    "libs/openssl/ssl.c SSL_new called_by_main",
];

/// Expected table for [`CORPUS_WELL_FORMED`], in order.
pub const EXPECTED_WELL_FORMED: &str = "\
printf,libc
uk_netdev_count,libuknetdev
ukplat_entry,libukboot
lwip_init,liblwip
__assert_fail,libc
tlsf_malloc,libtlsf
SSL_new,libopenssl
";

/// Records that carry neither marker and must produce no rows.
pub const CORPUS_UNMATCHED: &[&str] = &[
    "unrelated/path/file.c foo bar",
    "unikraft/plat/kvm/io.c outb called_by_serial",
    "unikraft/arch/x86/x86_64/include/uk/asm/lcpu.h ukarch_spinwait called_by_sched",
    "apps/app-sqlite/main.c main called_by_ukboot",
    "",
    "   ",
];

/// Records that match a marker but are too short to extract from.
pub const CORPUS_MALFORMED: &[&str] = &[
    "libs/openssl/ssl.c",
    "unikraft/lib",
];

/// A line carrying both markers (`unikraft/lib` is a prefix of `unikraft/libs/`).
pub const LINE_BOTH_MARKERS: &str = "unikraft/libs/lwip/init.c lwip_init called_by_main";

/// Join lines into file contents with a trailing newline.
pub fn deps_file(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
