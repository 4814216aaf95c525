//! URL ⇄ object fixture table.

/// `(url, expected descriptor as JSON)`.
pub const URLS_TO_OBJ: &[(&str, &str)] = &[
    (
        "https://cdn.pixelbin.io/v2/dummy-cloudname/original/__playground/playground-default.jpeg",
        r#"{
            "baseUrl": "https://cdn.pixelbin.io",
            "version": "v2",
            "cloudName": "dummy-cloudname",
            "zone": null,
            "pattern": "original",
            "filePath": "__playground/playground-default.jpeg",
            "options": {},
            "transformations": []
        }"#,
    ),
    (
        "https://cdn.pixelbin.io/v2/dummy-cloudname/z-slug/t.resize(h:100,w:200)~t.flip()/__playground/playground-default.jpeg",
        r#"{
            "baseUrl": "https://cdn.pixelbin.io",
            "version": "v2",
            "cloudName": "dummy-cloudname",
            "zone": "z-slug",
            "pattern": "t.resize(h:100,w:200)~t.flip()",
            "filePath": "__playground/playground-default.jpeg",
            "options": {},
            "transformations": [
                {
                    "plugin": "t",
                    "name": "resize",
                    "values": [
                        { "key": "h", "value": "100" },
                        { "key": "w", "value": "200" }
                    ]
                },
                { "plugin": "t", "name": "flip" }
            ]
        }"#,
    ),
    (
        "https://cdn.pixelbin.io/dummy-cloudname/p:grayscale~p:resize(w:300)/a.jpg?dpr=2.5&f_auto=true",
        r#"{
            "baseUrl": "https://cdn.pixelbin.io",
            "version": "v1",
            "cloudName": "dummy-cloudname",
            "zone": null,
            "pattern": "p:grayscale~p:resize(w:300)",
            "filePath": "a.jpg",
            "options": { "dpr": 2.5, "f_auto": true },
            "transformations": [
                { "plugin": "p", "name": "grayscale" },
                { "plugin": "p", "name": "resize", "values": [{ "key": "w", "value": "300" }] }
            ]
        }"#,
    ),
    (
        "https://cdn.pixelbin.io/v2/dummy-cloudname/erase.bg(i:general)~t.extend(t:10,b:10)/dir/a.png?unknown=1",
        r#"{
            "baseUrl": "https://cdn.pixelbin.io",
            "version": "v2",
            "cloudName": "dummy-cloudname",
            "zone": null,
            "pattern": "erase.bg(i:general)~t.extend(t:10,b:10)",
            "filePath": "dir/a.png",
            "options": {},
            "transformations": [
                { "plugin": "erase", "name": "bg", "values": [{ "key": "i", "value": "general" }] },
                {
                    "plugin": "t",
                    "name": "extend",
                    "values": [
                        { "key": "t", "value": "10" },
                        { "key": "b", "value": "10" }
                    ]
                }
            ]
        }"#,
    ),
    (
        "http://localhost:8080/v2/dummy-cloudname/z_slug/original/a.jpg",
        r#"{
            "baseUrl": "http://localhost:8080",
            "version": "v2",
            "cloudName": "dummy-cloudname",
            "zone": "z_slug",
            "pattern": "original",
            "filePath": "a.jpg",
            "options": {},
            "transformations": []
        }"#,
    ),
    (
        "https://cdn.pixelbin.io/v1/dummy-cloudname/t.compress(q:80)/a.jpg?f_auto=False",
        r#"{
            "baseUrl": "https://cdn.pixelbin.io",
            "version": "v1",
            "cloudName": "dummy-cloudname",
            "zone": null,
            "pattern": "t.compress(q:80)",
            "filePath": "a.jpg",
            "options": { "f_auto": false },
            "transformations": [
                { "plugin": "t", "name": "compress", "values": [{ "key": "q", "value": "80" }] }
            ]
        }"#,
    ),
];

pub struct ObjCase {
    pub obj: &'static str,
    /// Expected URL, or the expected error message.
    pub url: Result<&'static str, &'static str>,
}

pub const OBJS_TO_URL: &[ObjCase] = &[
    ObjCase {
        obj: r#"{
            "baseUrl": "https://cdn.pixelbin.io",
            "filePath": "__playground/playground-default.jpeg",
            "version": "v2",
            "zone": "z-slug",
            "cloudName": "red-scene-95b6ea",
            "options": { "dpr": 2.5, "f_auto": true },
            "transformations": [
                {
                    "plugin": "t",
                    "name": "resize",
                    "values": [{ "key": "h", "value": "100" }, { "key": "w", "value": "200" }]
                }
            ]
        }"#,
        url: Ok("https://cdn.pixelbin.io/v2/red-scene-95b6ea/z-slug/t.resize(h:100,w:200)/__playground/playground-default.jpeg?dpr=2.5&f_auto=True"),
    },
    ObjCase {
        obj: r#"{ "cloudName": "red-scene-95b6ea", "filePath": "a.jpg", "transformations": [] }"#,
        url: Ok("https://cdn.pixelbin.io/v2/red-scene-95b6ea/original/a.jpg"),
    },
    ObjCase {
        obj: r#"{
            "cloudName": "red-scene-95b6ea",
            "filePath": "a.jpg",
            "version": "v3",
            "zone": "toolongzone",
            "transformations": [{ "plugin": "t", "name": "flip" }]
        }"#,
        url: Ok("https://cdn.pixelbin.io/v2/red-scene-95b6ea/t.flip()/a.jpg"),
    },
    ObjCase {
        obj: r#"{
            "cloudName": "red-scene-95b6ea",
            "filePath": "a.jpg",
            "transformations": [{ "plugin": "p", "name": "grayscale" }, { "plugin": "t", "name": "flip" }]
        }"#,
        url: Ok("https://cdn.pixelbin.io/v2/red-scene-95b6ea/p:grayscale~t.flip()/a.jpg"),
    },
    ObjCase {
        obj: r#"{
            "cloudName": "red-scene-95b6ea",
            "filePath": "a.jpg",
            "transformations": [{}],
            "options": { "dpr": 1 }
        }"#,
        url: Ok("https://cdn.pixelbin.io/v2/red-scene-95b6ea/original/a.jpg?dpr=1.0"),
    },
    ObjCase {
        obj: r#"{
            "cloudName": "red-scene-95b6ea",
            "filePath": "a.jpg",
            "transformations": [{ "plugin": "t", "name": "resize", "values": [{ "value": "100" }] }]
        }"#,
        url: Err("key not specified in 'resize'"),
    },
    ObjCase {
        obj: r#"{
            "cloudName": "red-scene-95b6ea",
            "filePath": "a.jpg",
            "transformations": [{ "plugin": "t", "name": "resize", "values": [{ "key": "w" }] }]
        }"#,
        url: Err("value not specified for 'w' in 'resize'"),
    },
    ObjCase {
        obj: r#"{ "cloudName": "red-scene-95b6ea", "transformations": [] }"#,
        url: Err("key filePath should be defined"),
    },
    ObjCase {
        obj: r#"{ "filePath": "a.jpg", "transformations": [] }"#,
        url: Err("key cloudName should be defined"),
    },
];
