//! Map resource integration tests.

#[cfg(test)]
mod tests {
    use geostack_location_model::input::{
        GetMapGlyphsInput, GetMapSpritesInput, GetMapStyleDescriptorInput, GetMapTileInput,
    };

    use crate::location_client;

    #[tokio::test]
    async fn test_should_return_tile_bytes_and_content_type() {
        let (client, transport) = location_client();
        let tile: &[u8] = &[0x1a, 0x8b, 0x02, 0x0a, 0x05, b'r', b'o', b'a', b'd', b's'];
        transport.respond(
            200,
            &[
                ("content-type", "application/vnd.mapbox-vector-tile"),
                ("cache-control", "max-age=86400"),
            ],
            tile.to_vec(),
        );

        let input = GetMapTileInput {
            map_name: "city".to_owned(),
            x: "2594".to_owned(),
            y: "5635".to_owned(),
            z: "14".to_owned(),
        };
        let output = client.get_map_tile(input).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, http::Method::GET);
        assert_eq!(
            request.uri.to_string(),
            "https://maps.geo.us-west-2.amazonaws.com/maps/v0/maps/city/tiles/14/2594/5635"
        );
        assert!(request.body.is_empty());

        assert_eq!(output.blob.as_bytes(), tile);
        assert_eq!(
            output.content_type.as_deref(),
            Some("application/vnd.mapbox-vector-tile")
        );
        assert_eq!(output.cache_control.as_deref(), Some("max-age=86400"));
    }

    #[tokio::test]
    async fn test_should_encode_font_stack_label() {
        let (client, transport) = location_client();
        transport.respond(200, &[("content-type", "application/octet-stream")], "pbf");

        let input = GetMapGlyphsInput {
            map_name: "city".to_owned(),
            font_stack: "Noto Sans Regular,Arial Unicode MS Regular".to_owned(),
            font_unicode_range: "0-255.pbf".to_owned(),
        };
        let output = client.get_map_glyphs(input).await.unwrap();

        assert_eq!(
            transport.last_request().uri.path(),
            "/maps/v0/maps/city/glyphs/Noto%20Sans%20Regular%2CArial%20Unicode%20MS%20Regular/0-255.pbf"
        );
        assert_eq!(output.blob.len(), 3);
    }

    #[tokio::test]
    async fn test_should_fetch_sprites_and_style() {
        let (client, transport) = location_client();
        transport.respond(200, &[("content-type", "image/png")], vec![0x89, b'P', b'N', b'G']);
        transport.respond(
            200,
            &[("content-type", "application/json")],
            r#"{"version":8,"sources":{}}"#,
        );

        let sprites = client
            .get_map_sprites(GetMapSpritesInput {
                map_name: "city".to_owned(),
                file_name: "sprites@2x.png".to_owned(),
            })
            .await
            .unwrap();
        assert_eq!(sprites.content_type.as_deref(), Some("image/png"));

        let style = client
            .get_map_style_descriptor(GetMapStyleDescriptorInput {
                map_name: "city".to_owned(),
            })
            .await
            .unwrap();
        // The style document is returned verbatim, not decoded.
        assert_eq!(style.blob.as_bytes(), br#"{"version":8,"sources":{}}"#);

        let paths: Vec<_> = transport
            .requests()
            .iter()
            .map(|r| r.uri.path().to_owned())
            .collect();
        assert_eq!(paths, [
            "/maps/v0/maps/city/sprites/sprites%402x.png",
            "/maps/v0/maps/city/style-descriptor",
        ]);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_tile_coordinates() {
        let (client, transport) = location_client();

        let input = GetMapTileInput {
            map_name: "city".to_owned(),
            x: "-1".to_owned(),
            y: "0".to_owned(),
            z: "0".to_owned(),
        };
        assert!(client.get_map_tile(input).await.is_err());
        assert!(transport.requests().is_empty());
    }
}
