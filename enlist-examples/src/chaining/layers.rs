use enlist::{enlist, push_back};

pub fn layers() -> Vec<u32> {
    let mut layers = Vec::new();
    let mut inserter = enlist!(push_back(&mut layers); #[repeat_from_to] 0..3);
    enlist!(&mut inserter; 3, #[repeat_from_to(step = 10)] 10..40);
    inserter.by_ref().put(100);
    layers
}
