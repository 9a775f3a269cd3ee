use crate::version::Resolution;

pub fn print_resolution(r: &Resolution) {
    println!("{}", r.version);
}
