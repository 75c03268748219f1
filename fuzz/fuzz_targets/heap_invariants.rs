#![no_main]

use libfuzzer_sys::fuzz_target;

use dpheap::heap::is_heap_by;
use dpheap::heap::pop_heap_by;
use dpheap::heap::push_heap_by;
use dpheap::heap::remove_from_heap_by;
use dpheap::heap::restore_heap_after_item_decrease_by;
use dpheap::heap::restore_heap_after_item_increase_by;

const F: usize = 4;
const P: usize = 1;

#[derive(Debug, arbitrary::Arbitrary)]
enum Op {
    Push(i32),
    Pop,
    Remove(u8),
    Increase(u8, i32),
    Decrease(u8, i32),
}

fn less(a: &i32, b: &i32) -> bool {
    a < b
}

fuzz_target!(|ops: Vec<Op>| {
    let mut data: Vec<i32> = Vec::new();

    for op in ops {
        match op {
            Op::Push(v) => {
                data.push(v);
                push_heap_by::<_, _, F, P>(&mut data, less);
            }
            Op::Pop => {
                if !data.is_empty() {
                    pop_heap_by::<_, _, F, P>(&mut data, less);
                    data.pop();
                }
            }
            Op::Remove(i) => {
                if !data.is_empty() {
                    let idx = i as usize % data.len();
                    remove_from_heap_by::<_, _, F, P>(&mut data, idx, less);
                    data.pop();
                }
            }
            Op::Increase(i, delta) => {
                if !data.is_empty() {
                    let idx = i as usize % data.len();
                    data[idx] = data[idx].saturating_add(delta.unsigned_abs() as i32);
                    restore_heap_after_item_increase_by::<_, _, F, P>(&mut data, idx, less);
                }
            }
            Op::Decrease(i, delta) => {
                if !data.is_empty() {
                    let idx = i as usize % data.len();
                    data[idx] = data[idx].saturating_sub(delta.unsigned_abs() as i32);
                    restore_heap_after_item_decrease_by::<_, _, F, P>(&mut data, idx, less);
                }
            }
        }
        assert!(is_heap_by::<_, _, F, P>(&data, less));
    }
});
