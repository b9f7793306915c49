// SPDX-License-Identifier: Apache-2.0

// Maps a person record with a nested address and two arrays

use jsoncraft::{parse_with_descriptors, terminated_str, ArrayTarget, Descriptor, Integer, MapError};

struct Address {
    street: [u8; 100],
    number: Integer,
    city: [u8; 50],
}

struct Person {
    name: [u8; 50],
    age: Integer,
    is_student: bool,
    gpa: f64,
    address: Address,
    scores: [Integer; 5],
    tags: [[u8; 20]; 3],
}

impl Person {
    fn new() -> Self {
        Person {
            name: [0; 50],
            age: 0,
            is_student: false,
            gpa: 0.0,
            address: Address {
                street: [0; 100],
                number: 0,
                city: [0; 50],
            },
            scores: [0; 5],
            tags: [[0; 20]; 3],
        }
    }
}

fn text(buf: &[u8]) -> &str {
    terminated_str(buf).unwrap_or("<invalid utf-8>")
}

fn main() -> Result<(), MapError> {
    let json = r#"{
        "name": "John",
        "age": 25,
        "is_student": true,
        "gpa": 3.80,
        "address": {
            "street": "Main St",
            "number": 123,
            "city": "New York"
        },
        "scores": [85, 92, 88, 95, 90],
        "tags": ["smart", "friendly", "active"]
    }"#;

    let mut person = Person::new();
    {
        let p = &mut person;
        let address = vec![
            Descriptor::string("street", &mut p.address.street).required(),
            Descriptor::integer("number", &mut p.address.number).required(),
            Descriptor::string("city", &mut p.address.city),
        ];
        let mut fields = [
            Descriptor::integer("age", &mut p.age).required(),
            Descriptor::string("name", &mut p.name).required(),
            Descriptor::boolean("is_student", &mut p.is_student),
            Descriptor::double("gpa", &mut p.gpa),
            Descriptor::object("address", address).required(),
            Descriptor::array("scores", ArrayTarget::integers(&mut p.scores)).required(),
            Descriptor::array("tags", ArrayTarget::strings(&mut p.tags)),
        ];
        parse_with_descriptors(json, &mut fields)?;
    }

    println!("Person parsed successfully!");
    println!("Name: {}", text(&person.name));
    println!("Age: {}", person.age);
    println!("Is student: {}", if person.is_student { "yes" } else { "no" });
    println!("GPA: {:.2}", person.gpa);
    println!(
        "Address: {} {}, {}",
        text(&person.address.street),
        person.address.number,
        text(&person.address.city)
    );
    println!("Scores: {:?}", person.scores);
    let tags: Vec<&str> = person.tags.iter().map(|t| text(t)).collect();
    println!("Tags: {:?}", tags);

    // A required field that is absent is reported by name
    let mut name = [0u8; 50];
    let mut fields = [Descriptor::string("name", &mut name).required()];
    if let Err(e) = parse_with_descriptors("{}", &mut fields) {
        println!("Expected failure: {e}");
    }
    Ok(())
}
