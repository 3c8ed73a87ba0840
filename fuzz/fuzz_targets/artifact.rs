#![no_main]

use libfuzzer_sys::fuzz_target;
use traitdex::Artifact;

fuzz_target!(|data: &[u8]| {
    let _ = Artifact::from_mem(data.to_vec());
});
