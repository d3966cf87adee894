//! Build script for ABI compatibility testing
//!
//! Compiles a C reference of the lock-debug structures, in both the
//! `LOCK_DEBUG` and plain shapes, so tests can compare whichever layout the
//! Rust side was built with.

use std::env;
use std::path::{Path, PathBuf};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    generate_reference_c_code(&out_dir);

    println!("cargo:rerun-if-changed=build.rs");
}

fn generate_reference_c_code(out_dir: &Path) {
    let c_code = r#"
#include <stddef.h>

/* Reference structures for ABI verification */

#define SPINLOCK_MAGIC 0xdead4ead

/* Shapes with LOCK_DEBUG defined */
typedef struct {
    unsigned int magic;
    int lock;
} spinlock_debug_t;

struct rw_semaphore_debug {
    unsigned int magic;
    int count;
};

struct mutex_debug {
    struct rw_semaphore_debug sem;
};

/* Shapes without LOCK_DEBUG (GNU C gives empty structs size 0) */
typedef struct {
} spinlock_plain_t;

struct rw_semaphore_plain {
};

struct mutex_plain {
};

typedef struct {
    int counter;
} atomic_t;

size_t spinlock_debug_size(void) { return sizeof(spinlock_debug_t); }
size_t spinlock_debug_align(void) { return _Alignof(spinlock_debug_t); }
size_t spinlock_debug_magic_offset(void) { return offsetof(spinlock_debug_t, magic); }
size_t spinlock_debug_lock_offset(void) { return offsetof(spinlock_debug_t, lock); }

size_t rw_semaphore_debug_size(void) { return sizeof(struct rw_semaphore_debug); }
size_t rw_semaphore_debug_magic_offset(void) { return offsetof(struct rw_semaphore_debug, magic); }
size_t rw_semaphore_debug_count_offset(void) { return offsetof(struct rw_semaphore_debug, count); }

size_t mutex_debug_size(void) { return sizeof(struct mutex_debug); }
size_t mutex_debug_sem_offset(void) { return offsetof(struct mutex_debug, sem); }

size_t spinlock_plain_size(void) { return sizeof(spinlock_plain_t); }
size_t rw_semaphore_plain_size(void) { return sizeof(struct rw_semaphore_plain); }
size_t mutex_plain_size(void) { return sizeof(struct mutex_plain); }

size_t atomic_size(void) { return sizeof(atomic_t); }
size_t atomic_align(void) { return _Alignof(atomic_t); }

unsigned int VERIFY_SPINLOCK_MAGIC = SPINLOCK_MAGIC;
"#;

    let c_file = out_dir.join("lockdebug_reference.c");
    std::fs::write(&c_file, c_code).expect("Failed to write C reference code");

    cc::Build::new()
        .file(&c_file)
        .warnings(false)
        .static_flag(true)
        .compile("lockdebug_reference");
}
