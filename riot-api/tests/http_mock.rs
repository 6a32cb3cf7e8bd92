use std::{num::NonZeroU32, time::Duration};

use deathrecap_riot_api::{CacheTtls, ClientConfig, RiotApiClient, types::RiotApiError};
use deathrecap_shared::{
    Cluster, Region,
    traits::api::{MatchApi, SummonerApi},
};
use httpmock::prelude::*;
use serde_json::json;

const KEY: &str = "RGAPI-TEST";

fn client_for(server: &MockServer, cache_ttls: CacheTtls) -> RiotApiClient {
    RiotApiClient::with_config(
        KEY.to_string(),
        ClientConfig {
            cache_ttls,
            base_url: Some(server.base_url()),
            ..Default::default()
        },
    )
}

fn match_body(puuid: &str) -> serde_json::Value {
    json!({
        "metadata": { "matchId": "EUW1_42" },
        "info": {
            "gameCreation": 1700000000000_i64,
            "gameMode": "CLASSIC",
            "gameType": "MATCHED_GAME",
            "participants": [
                {
                    "puuid": puuid,
                    "totalTimeSpentDead": 120,
                    "totalTimeCCDealt": 33,
                    "timePlayed": 1650,
                    "longestTimeSpentLiving": 700,
                    "deaths": 4,
                    "totalDamageTaken": 21000,
                    "totalDamageDealtToChampions": 15000
                }
            ]
        }
    })
}

#[tokio::test]
async fn summoner_name_lookup_sends_key_and_returns_puuid() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/summoner/v4/summoners/by-name/Faker")
                .header("X-Riot-Token", KEY);
            then.status(200)
                .json_body(json!({ "puuid": "faker-puuid", "summonerLevel": 700 }));
        })
        .await;

    let api = client_for(&server, CacheTtls::disabled());
    let puuid = api.get_puuid_by_name("Faker", Region::KR).await.unwrap();

    assert_eq!(puuid, "faker-puuid");
    mock.assert_async().await;
}

#[tokio::test]
async fn riot_id_lookup_uses_account_endpoint() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-riot-id/Hide/KR1");
            then.status(200).json_body(json!({
                "puuid": "hide-puuid",
                "gameName": "Hide",
                "tagLine": "KR1"
            }));
        })
        .await;

    let api = client_for(&server, CacheTtls::disabled());
    let puuid = api.get_puuid_by_name("Hide#KR1", Region::KR).await.unwrap();

    assert_eq!(puuid, "hide-puuid");
    mock.assert_async().await;
}

#[tokio::test]
async fn unknown_summoner_surfaces_status_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/summoner/v4/summoners/by-name/Nobody");
            then.status(404);
        })
        .await;

    let api = client_for(&server, CacheTtls::disabled());
    let err = api
        .get_summoner_by_name("Nobody", Region::NA1)
        .await
        .unwrap_err();

    assert!(matches!(err, RiotApiError::Status(status) if status.as_u16() == 404));
}

#[tokio::test]
async fn match_ids_keep_upstream_order() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/match/v5/matches/by-puuid/p1/ids");
            then.status(200)
                .json_body(json!(["NA1_3", "NA1_1", "NA1_2"]));
        })
        .await;

    let api = client_for(&server, CacheTtls::disabled());
    let ids = api.get_match_ids("p1", Cluster::Americas).await.unwrap();

    assert_eq!(ids, vec!["NA1_3", "NA1_1", "NA1_2"]);
}

#[tokio::test]
async fn match_detail_is_decoded_into_match() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/match/v5/matches/EUW1_42");
            then.status(200).json_body(match_body("p1"));
        })
        .await;

    let api = client_for(&server, CacheTtls::disabled());
    let game = api.get_match("EUW1_42", Cluster::Europe).await.unwrap();

    assert_eq!(game.game_type.as_deref(), Some("MATCHED_GAME"));
    let player = game.participant("p1").unwrap();
    assert_eq!(player.total_time_cc_dealt, Some(33));
    assert_eq!(player.deaths, Some(4));
}

#[tokio::test]
async fn malformed_match_detail_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/match/v5/matches/EUW1_43");
            then.status(200).body("{\"info\": 12}");
        })
        .await;

    let api = client_for(&server, CacheTtls::disabled());
    assert!(api.get_match("EUW1_43", Cluster::Europe).await.is_err());
}

#[tokio::test]
async fn successful_responses_are_cached_per_bucket() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/match/v5/matches/EUW1_42");
            then.status(200).json_body(match_body("p1"));
        })
        .await;

    let api = client_for(&server, CacheTtls::default());
    api.get_match("EUW1_42", Cluster::Europe).await.unwrap();
    api.get_match("EUW1_42", Cluster::Europe).await.unwrap();

    mock.assert_hits_async(1).await;
    assert_eq!(api.metrics().requests(), 1);
    assert_eq!(api.metrics().cache_hits(), 1);
}

#[tokio::test]
async fn cache_entries_expire() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/match/v5/matches/by-puuid/p1/ids");
            then.status(200).json_body(json!(["EUW1_1"]));
        })
        .await;

    let api = client_for(
        &server,
        CacheTtls {
            match_ids: Duration::from_millis(50),
            ..Default::default()
        },
    );
    api.get_match_ids("p1", Cluster::Europe).await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    api.get_match_ids("p1", Cluster::Europe).await.unwrap();

    mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn failures_are_not_cached() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/match/v5/matches/EUW1_9");
            then.status(503);
        })
        .await;

    let api = client_for(&server, CacheTtls::default());
    assert!(api.get_match("EUW1_9", Cluster::Europe).await.is_err());
    assert!(api.get_match("EUW1_9", Cluster::Europe).await.is_err());

    mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/match/v5/matches/EUW1_10");
            then.status(200)
                .json_body(match_body("p1"))
                .delay(Duration::from_millis(800));
        })
        .await;

    let api = RiotApiClient::with_config(
        KEY.to_string(),
        ClientConfig {
            cache_ttls: CacheTtls::disabled(),
            request_timeout: Duration::from_millis(100),
            base_url: Some(server.base_url()),
            ..Default::default()
        },
    );

    let err = api.get_match("EUW1_10", Cluster::Europe).await.unwrap_err();
    let err = err.downcast_ref::<RiotApiError>().unwrap();
    assert!(matches!(
        err,
        RiotApiError::TimedOut(timeout) if *timeout == Duration::from_millis(100)
    ));
}

#[tokio::test]
async fn rate_limiter_wait_is_not_part_of_the_timeout() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/match/v5/matches/EUW1_42");
            then.status(200).json_body(match_body("p1"));
        })
        .await;

    // One request every 500 ms, each exchange bounded to 200 ms.
    let api = RiotApiClient::with_config(
        KEY.to_string(),
        ClientConfig {
            rate_limit_per_minute: NonZeroU32::new(120).unwrap(),
            rate_limit_burst: NonZeroU32::MIN,
            cache_ttls: CacheTtls::disabled(),
            request_timeout: Duration::from_millis(200),
            base_url: Some(server.base_url()),
        },
    );

    for _ in 0..3 {
        api.get_match("EUW1_42", Cluster::Europe).await.unwrap();
    }

    mock.assert_hits_async(3).await;
}
