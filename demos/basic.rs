fn main() {
    let input = "Hello world!";
    let hash_hex = hex::encode(fips_sha256::digest(input.as_bytes()));
    println!("The hash of \"{}\" is {}", input, hash_hex);
    assert_eq!(hash_hex, "c0535e4be2b79ffd93291305436bf889314e4a3faec05ecffcbb7df31ad9e51a");
}
