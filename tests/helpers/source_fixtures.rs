//! Common source code fixtures for tests.

pub const SIMPLE_STRUCT: &str = "struct User {\n  1: i64 id\n  2: string name\n}";

pub const DUPLICATE_STRUCTS: &str = "struct User {\n  1: i64 id\n}\n\nstruct User {\n  2: string name\n}";

pub const DUPLICATE_FIELD_ID: &str = "struct User {\n  1: i64 id,\n  1: string name\n}";

pub const NEGATIVE_FIELD_ID: &str = "struct User {\n  -1: string name\n}";

pub const UNKNOWN_TYPE: &str = "struct User { 1: UnknownType x }";

pub const SERVICE_WITH_THROWS: &str = r#"
struct User {
  1: i64 id
}

exception NotFound {
  1: string message
}

service S { User getUser(1: i64 id) throws (1: NotFound e) }
"#;

pub const USER_SERVICE: &str = r#"namespace go users

include "shared.thrift"

typedef i64 UserId

const i32 MAX_USERS = 100

enum Role {
  ADMIN = 1,
  MEMBER = 2
}

struct User {
  1: required UserId id
  2: optional string name
  3: Role role = Role.MEMBER
  4: list<string> tags
  5: map<string, User> friends
}

exception NotFound {
  1: string message
}

service UserService extends shared.BaseService {
  User getUser(1: UserId id) throws (1: NotFound notFound)
  oneway void touch(1: UserId id)
}
"#;

pub const EVENTS_SCOPE: &str = r#"struct Event {
  1: string id
}

scope Events prefix "v1.events" {
  Created: Event
  Deleted: Event
}
"#;
